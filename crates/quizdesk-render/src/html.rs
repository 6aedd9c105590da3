//! Shared HTML building blocks: escaping, the page shell, and inline assets.
//!
//! Every page is self-contained, with CSS/JS inlined.

/// Escape a string for safe HTML insertion.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wrap `body` in the common page shell.
///
/// `username` is shown in the navigation bar alongside a logout link.
pub fn page(title: &str, username: Option<&str>, body: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{} — quizdesk</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<nav>\n<a href=\"/\" class=\"brand\">quizdesk</a>\n");
    if let Some(user) = username {
        html.push_str(&format!(
            "<span class=\"user\">Signed in as <strong>{}</strong> · <a href=\"/logout\">Log out</a></span>\n",
            html_escape(user)
        ));
    }
    html.push_str("</nav>\n");

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");

    html.push_str("</body>\n</html>");
    html
}

pub(crate) const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --muted: #6b7280; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; --accent: #2563eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; --accent: #60a5fa; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; background: var(--bg); color: var(--fg); }
nav { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
nav a { color: var(--accent); text-decoration: none; }
.brand { font-weight: bold; font-size: 1.2rem; }
main { max-width: 960px; margin: 0 auto; padding: 2rem; }
.meta { color: var(--muted); }
.error { background: var(--fail); padding: 0.75rem 1rem; border-radius: 6px; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; vertical-align: top; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
.quiz-card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem 1.5rem; margin: 1rem 0; }
.question { border-top: 1px solid var(--border); padding: 1rem 0; }
.points { color: var(--muted); font-size: 0.9rem; }
.answer-input { display: flex; align-items: center; gap: 0.25rem; }
.answer-input input, .answer-input textarea { flex: 1; padding: 0.5rem; font: inherit; }
.score { font-size: 1.5rem; }
button { padding: 0.6rem 1.4rem; font: inherit; cursor: pointer; }
form.login { max-width: 320px; display: grid; gap: 0.75rem; }
"#;

pub(crate) const SUBMIT_JS: &str = r#"
async function submitQuiz(event) {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById('status');
  const answers = {};
  form.querySelectorAll('[data-question]').forEach(el => {
    answers[el.dataset.question] = el.value;
  });
  const payload = { quiz_id: Number(form.dataset.quiz), answers };
  try {
    const response = await fetch('/api/submit_quiz', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload),
    });
    const body = await response.json();
    if (body.success) {
      window.location.href = '/results/' + body.submission_id;
    } else {
      status.textContent = body.message;
      status.className = 'error';
    }
  } catch (err) {
    status.textContent = 'Submission failed: ' + err;
    status.className = 'error';
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn page_shell_shows_user_when_signed_in() {
        let html = page("Quizzes", Some("<test>"), "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Quizzes — quizdesk</title>"));
        assert!(html.contains("&lt;test&gt;"));
        assert!(html.contains("/logout"));
        assert!(html.contains("<p>body</p>"));

        let anonymous = page("Log in", None, "");
        assert!(!anonymous.contains("/logout"));
    }
}
