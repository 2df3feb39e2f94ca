use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use db::models::{
    assignment::{AssignmentFields, Model},
    code_mapping::{CodeFile, CodeMapping},
};
use sea_orm::{DatabaseConnection, DbErr};
use services::templates;

pub struct AssignmentSeeder;

fn starter(tag: &str, path: &str, code: &str) -> Result<CodeMapping, DbErr> {
    let mut files = templates::template_for(tag)
        .ok_or_else(|| DbErr::Custom(format!("Unknown template '{tag}'")))?;
    files
        .insert(path, CodeFile::new(code).active())
        .map_err(|e| DbErr::Custom(e.to_string()))?;
    Ok(files)
}

#[async_trait]
impl Seeder for AssignmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if !Model::list_ordered(db).await?.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let samples = vec![
            AssignmentFields {
                title: "Personal profile page".into(),
                description: "## Task\n\nBuild a single page that introduces yourself.\n\n- A heading with your name\n- A short bio paragraph\n- A list of three hobbies".into(),
                language: "static".into(),
                due_date: now + Duration::days(7),
                default_code: CodeMapping::new(),
            },
            AssignmentFields {
                title: "Click counter".into(),
                description: "## Task\n\nRender a button that shows how many times it was clicked.\n\nUse `useState`.".into(),
                language: "react".into(),
                due_date: now + Duration::days(3),
                default_code: starter(
                    "react",
                    "/App.js",
                    "import { useState } from \"react\";\n\nexport default function App() {\n  // keep a count in state\n  return <button>Clicked 0 times</button>;\n}\n",
                )?,
            },
            AssignmentFields {
                title: "Todo list".into(),
                description: "## Task\n\nLet the user add and remove todos. Show the remaining count.".into(),
                language: "vue".into(),
                due_date: now + Duration::days(10),
                default_code: CodeMapping::new(),
            },
            AssignmentFields {
                title: "FizzBuzz".into(),
                description: "## Task\n\nPrint the numbers 1 to 100. For multiples of three print `Fizz`, for multiples of five `Buzz`, for both `FizzBuzz`.".into(),
                language: "node".into(),
                due_date: now - Duration::days(1),
                default_code: CodeMapping::new(),
            },
        ];

        for fields in samples {
            Model::create(db, fields).await?;
        }
        Ok(())
    }
}
