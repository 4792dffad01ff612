use crate::models::{Habit, HabitState};

pub fn render_index(state: &HabitState, progress: u8) -> String {
    // habits go last so user text is never scanned for placeholders
    INDEX_HTML
        .replace("{{DATE}}", &escape_html(&state.day))
        .replace("{{PROGRESS}}", &progress.to_string())
        .replace("{{HABITS}}", &render_habits(&state.habits))
}

fn render_habits(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return r#"<p class="empty">No habits yet. Add one above.</p>"#.to_string();
    }

    habits
        .iter()
        .map(|habit| {
            let class = if habit.done { "card done" } else { "card" };
            format!(
                r#"<form method="post" action="/habits/{id}/toggle"><button class="{class}" type="submit">{text}</button></form>"#,
                id = habit.id,
                text = escape_html(&habit.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>CalmLoop</title>
  <style>
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: #020617;
      color: #e5e7eb;
      font-family: Inter, sans-serif;
    }

    .header {
      max-width: 1100px;
      margin: auto;
      padding: 20px;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .header h1 {
      color: #22d3ee;
    }

    .hero {
      max-width: 700px;
      margin: 40px auto;
      text-align: center;
      padding: 0 20px;
    }

    .hero p,
    .footer,
    .empty {
      color: #94a3b8;
    }

    .app {
      max-width: 900px;
      margin: auto;
      padding: 20px;
    }

    .input-row {
      display: flex;
      gap: 10px;
      margin-bottom: 20px;
    }

    .input-row input {
      flex: 1;
      padding: 14px;
      border-radius: 10px;
      background: #020617;
      color: white;
      border: 1px solid #22d3ee;
    }

    .input-row button {
      width: 56px;
      font-size: 24px;
      border-radius: 10px;
      border: none;
      background: linear-gradient(90deg, #14b8a6, #22d3ee);
      cursor: pointer;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .grid form {
      margin: 0;
    }

    .card {
      width: 100%;
      padding: 16px;
      text-align: left;
      font: inherit;
      color: inherit;
      background: rgba(255, 255, 255, 0.05);
      border-radius: 14px;
      cursor: pointer;
      border: 1px solid rgba(255, 255, 255, 0.1);
    }

    .card.done {
      opacity: 0.6;
      text-decoration: line-through;
    }

    .progress {
      margin-top: 30px;
    }

    .bar {
      height: 8px;
      background: #0f172a;
      border-radius: 20px;
      overflow: hidden;
      margin-top: 6px;
    }

    .fill {
      height: 100%;
      background: linear-gradient(90deg, #14b8a6, #22d3ee);
    }

    .footer {
      margin-top: 60px;
      padding: 20px;
      text-align: center;
    }

    @media (max-width: 600px) {
      .header {
        flex-direction: column;
        align-items: flex-start;
        gap: 8px;
      }

      .input-row {
        flex-direction: column;
      }

      .input-row button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <header class="header">
    <h1>CalmLoop</h1>
    <span id="date">{{DATE}}</span>
  </header>

  <section class="hero">
    <h2>Build calm habits. One day at a time.</h2>
    <p>Add your habits, stay consistent, and track your daily progress.</p>
  </section>

  <main class="app">
    <form class="input-row" method="post" action="/habits/add">
      <input name="text" placeholder="Add a habit..." autocomplete="off" />
      <button type="submit">+</button>
    </form>

    <div class="grid">
        {{HABITS}}
    </div>

    <div class="progress">
      <span id="progress">{{PROGRESS}}% completed</span>
      <div class="bar">
        <div class="fill" style="width: {{PROGRESS}}%"></div>
      </div>
    </div>
  </main>

  <footer class="footer">
    <p>Done flags reset at the start of each calendar day.</p>
  </footer>
</body>
</html>
"#;
