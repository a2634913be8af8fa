//! HTML templates using Handlebars. Everything interpolated with
//! `{{ }}` is HTML escaped, which matters here since both the
//! question and the model's answer are untrusted.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Template {
    Page,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{title}}</title>
  <style>
    body { display: flex; margin: 0; font-family: sans-serif; }
    aside { width: 18rem; padding: 1.5rem; background: #f0f2f6; min-height: 100vh; }
    main { flex: 1; padding: 1.5rem 3rem; max-width: 48rem; }
    label { display: block; margin: 1rem 0 0.25rem; }
    textarea, select, input[type=text] { width: 100%; box-sizing: border-box; }
    .response { white-space: pre-wrap; }
    .error { padding: 1rem; color: #7d353b; background: #ffe9e9; border-radius: 0.5rem; }
  </style>
</head>
<body>
{{#if config_error}}
  <main>
    <div class="error">{{config_error}}</div>
  </main>
{{else}}
  <form method="post" action="/" style="display: contents">
    <aside>
      <h2>Customize Your Foundation Agent</h2>
      <label for="system_prompt">System Prompt:</label>
      <textarea id="system_prompt" name="system_prompt" rows="6">{{system_prompt}}</textarea>
      <label for="model">Choose Model:</label>
      <select id="model" name="model">
        {{#each models}}
        <option value="{{id}}"{{#if selected}} selected{{/if}}>{{id}}</option>
        {{/each}}
      </select>
    </aside>
    <main>
      <h1>{{title}}</h1>
      <p>{{description}}</p>
      <label for="question">Ask me something:</label>
      <input type="text" id="question" name="question" value="{{question}}" autofocus>
      {{#if response}}
      <h3>Response:</h3>
      <div class="response">{{response}}</div>
      {{/if}}
      {{#if error}}
      <div class="error">{{error}}</div>
      {{/if}}
    </main>
  </form>
{{/if}}
</body>
</html>
"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(&Template::Page.to_string(), PAGE_TEMPLATE)
        .expect("Failed to register template");
    registry
}
