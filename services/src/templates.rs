//! Starter file sets for each runtime the editor supports.
//!
//! An assignment's `language` must be one of these tags. When an assignment has
//! no `default_code` of its own, students start from the template.

use db::models::code_mapping::{CodeFile, CodeMapping};

#[derive(Clone, Copy)]
struct TemplateFile {
    path: &'static str,
    code: &'static str,
    active: bool,
    hidden: bool,
}

const fn file(path: &'static str, code: &'static str) -> TemplateFile {
    TemplateFile {
        path,
        code,
        active: false,
        hidden: false,
    }
}

const fn active(path: &'static str, code: &'static str) -> TemplateFile {
    TemplateFile {
        active: true,
        ..file(path, code)
    }
}

const fn hidden(path: &'static str, code: &'static str) -> TemplateFile {
    TemplateFile {
        hidden: true,
        ..file(path, code)
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Practice</title>
    <link rel="stylesheet" href="/styles.css" />
  </head>
  <body>
    <div id="app"></div>
  </body>
</html>
"#;

const STYLES_CSS: &str = "body {\n  font-family: sans-serif;\n}\n";

const STATIC: &[TemplateFile] = &[
    active(
        "/index.html",
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="stylesheet" href="/styles.css" />
  </head>
  <body>
    <h1>Hello world</h1>
  </body>
</html>
"#,
    ),
    file("/styles.css", STYLES_CSS),
];

const VANILLA: &[TemplateFile] = &[
    active(
        "/index.js",
        "import \"./styles.css\";\n\ndocument.getElementById(\"app\").innerHTML = `<h1>Hello world</h1>`;\n",
    ),
    file("/index.html", INDEX_HTML),
    file("/styles.css", STYLES_CSS),
    hidden(
        "/package.json",
        "{\n  \"main\": \"/index.js\",\n  \"dependencies\": {}\n}\n",
    ),
];

const VANILLA_TS: &[TemplateFile] = &[
    active(
        "/index.ts",
        "import \"./styles.css\";\n\nconst app = document.getElementById(\"app\") as HTMLElement;\napp.innerHTML = `<h1>Hello world</h1>`;\n",
    ),
    file("/index.html", INDEX_HTML),
    file("/styles.css", STYLES_CSS),
    hidden(
        "/tsconfig.json",
        "{\n  \"compilerOptions\": {\n    \"strict\": true,\n    \"target\": \"es2017\"\n  }\n}\n",
    ),
    hidden(
        "/package.json",
        "{\n  \"main\": \"/index.ts\",\n  \"dependencies\": {},\n  \"devDependencies\": {\n    \"typescript\": \"^5.0.0\"\n  }\n}\n",
    ),
];

const REACT: &[TemplateFile] = &[
    active(
        "/App.js",
        "export default function App() {\n  return <h1>Hello world</h1>;\n}\n",
    ),
    file(
        "/index.js",
        "import React from \"react\";\nimport { createRoot } from \"react-dom/client\";\nimport \"./styles.css\";\nimport App from \"./App\";\n\ncreateRoot(document.getElementById(\"root\")).render(<App />);\n",
    ),
    file("/styles.css", STYLES_CSS),
    hidden(
        "/public/index.html",
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <body>\n    <div id=\"root\"></div>\n  </body>\n</html>\n",
    ),
    hidden(
        "/package.json",
        "{\n  \"main\": \"/index.js\",\n  \"dependencies\": {\n    \"react\": \"^18.0.0\",\n    \"react-dom\": \"^18.0.0\"\n  }\n}\n",
    ),
];

const REACT_TS: &[TemplateFile] = &[
    active(
        "/App.tsx",
        "export default function App(): JSX.Element {\n  return <h1>Hello world</h1>;\n}\n",
    ),
    file(
        "/index.tsx",
        "import React from \"react\";\nimport { createRoot } from \"react-dom/client\";\nimport \"./styles.css\";\nimport App from \"./App\";\n\ncreateRoot(document.getElementById(\"root\") as HTMLElement).render(<App />);\n",
    ),
    file("/styles.css", STYLES_CSS),
    hidden(
        "/tsconfig.json",
        "{\n  \"compilerOptions\": {\n    \"jsx\": \"react-jsx\",\n    \"strict\": true\n  }\n}\n",
    ),
    hidden(
        "/package.json",
        "{\n  \"main\": \"/index.tsx\",\n  \"dependencies\": {\n    \"react\": \"^18.0.0\",\n    \"react-dom\": \"^18.0.0\"\n  },\n  \"devDependencies\": {\n    \"@types/react\": \"^18.0.0\",\n    \"typescript\": \"^5.0.0\"\n  }\n}\n",
    ),
];

const VUE: &[TemplateFile] = &[
    active(
        "/src/App.vue",
        "<template>\n  <h1>{{ msg }}</h1>\n</template>\n\n<script setup>\nconst msg = \"Hello world\";\n</script>\n",
    ),
    file(
        "/src/main.js",
        "import { createApp } from \"vue\";\nimport App from \"./App.vue\";\n\ncreateApp(App).mount(\"#app\");\n",
    ),
    hidden("/index.html", INDEX_HTML),
    hidden(
        "/package.json",
        "{\n  \"main\": \"/src/main.js\",\n  \"dependencies\": {\n    \"vue\": \"^3.3.0\"\n  }\n}\n",
    ),
];

const NODE: &[TemplateFile] = &[
    active("/index.js", "console.log(\"Hello world\");\n"),
    file(
        "/package.json",
        "{\n  \"name\": \"practice\",\n  \"main\": \"index.js\",\n  \"scripts\": {\n    \"start\": \"node index.js\"\n  }\n}\n",
    ),
];

const TEMPLATES: &[(&str, &[TemplateFile])] = &[
    ("static", STATIC),
    ("vanilla", VANILLA),
    ("vanilla-ts", VANILLA_TS),
    ("react", REACT),
    ("react-ts", REACT_TS),
    ("vue", VUE),
    ("node", NODE),
];

/// Every supported template tag, in catalogue order.
pub fn all_tags() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(tag, _)| *tag).collect()
}

pub fn is_known(tag: &str) -> bool {
    TEMPLATES.iter().any(|(t, _)| *t == tag)
}

/// Starter files for `tag`, or `None` for an unknown tag.
pub fn template_for(tag: &str) -> Option<CodeMapping> {
    let (_, files) = TEMPLATES.iter().find(|(t, _)| *t == tag)?;

    let mut mapping = CodeMapping::new();
    for f in files.iter() {
        let mut code_file = CodeFile::new(f.code);
        code_file.active = f.active;
        code_file.hidden = f.hidden;
        if let Err(e) = mapping.insert(f.path, code_file) {
            tracing::error!(tag, path = f.path, error = %e, "Invalid template file");
        }
    }
    Some(mapping)
}
