use std::fmt::{self, Display};

use super::{SendEmail, send_email};

pub struct AccessCodeTemplate<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

impl<'a> Display for AccessCodeTemplate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_template = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1.0">
                <title>Your Sign-in Code</title>
                <style>
                    body {{
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
                        line-height: 1.6;
                        margin: 0;
                        padding: 0;
                        background-color: #f9fafb;
                    }}
                    .container {{
                        max-width: 600px;
                        margin: 0 auto;
                        padding: 20px;
                    }}
                    .code-container {{
                        text-align: center;
                        margin: 40px 0;
                        padding: 30px;
                        background-color: #ffffff;
                        border-radius: 8px;
                        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
                    }}
                    .code {{
                        font-size: 32px;
                        font-weight: bold;
                        letter-spacing: 4px;
                        color: #1d4ed8;
                        margin: 20px 0;
                    }}
                    .message {{
                        color: #4b5563;
                        font-size: 14px;
                        margin: 20px 0;
                    }}
                </style>
            </head>
            <body>
                <div class="container">
                    <div class="code-container">
                        <h2 style="color: #111827; margin: 0;">Hi {}, here is your sign-in code</h2>
                        <div class="code">{}</div>
                        <p class="message">
                            This code is for one-time use and expires in an hour.<br>
                            If you did not request it, you can safely ignore this email.
                        </p>
                    </div>
                </div>
            </body>
            </html>
            "#,
            self.name, self.code
        );
        write!(f, "{}", html_template)
    }
}

impl<'a> SendEmail for AccessCodeTemplate<'a> {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            "Your placement portal sign-in code",
            &format!("{}", &self),
            true,
        )?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn template_embeds_name_and_code() {
        let html = format!(
            "{}",
            AccessCodeTemplate {
                name: "Priya",
                code: "482913",
            }
        );
        assert!(html.contains("Priya"));
        assert!(html.contains("482913"));
    }
}
