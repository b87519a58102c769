use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
  Verification,
  PasswordReset,
}

impl EmailKind {
  pub fn subject(&self) -> &'static str {
    match self {
      EmailKind::Verification => "Email Verification",
      EmailKind::PasswordReset => "Password Reset",
    }
  }

  pub fn intro(&self, app_name: &str) -> String {
    match self {
      EmailKind::Verification => format!(
        "Thank you for joining {}, the platform that helps you relive and share your cherished memories with friends and family. To keep your account secure we need to verify your email address.",
        app_name
      ),
      EmailKind::PasswordReset => format!(
        "We received a request to reset the password of your {} account. Click the button below to choose a new password.",
        app_name
      ),
    }
  }

  pub fn expiry_label(&self) -> &'static str {
    match self {
      EmailKind::Verification => "This verification link expires in",
      EmailKind::PasswordReset => "This link expires in",
    }
  }

  pub fn button_label(&self) -> &'static str {
    match self {
      EmailKind::Verification => "Verify Your Email Address",
      EmailKind::PasswordReset => "Reset Your Password",
    }
  }

  pub fn disclaimer(&self, app_name: &str) -> String {
    match self {
      EmailKind::Verification => format!(
        "If you did not create an account on {}, please disregard this email. Your account will not be activated until you verify your email.",
        app_name
      ),
      EmailKind::PasswordReset => {
        "If you did not ask for a password reset, you can ignore this email. Your password will stay the same.".to_string()
      }
    }
  }
}

/// Shared layout for both action emails. Every field is HTML-escaped on render.
#[derive(Debug, Clone, Template)]
#[template(path = "action_email.html")]
pub struct ActionEmail<'a> {
  pub kind: EmailKind,
  pub recipient_name: &'a str,
  pub action_link: &'a str,
  pub expiry_text: &'a str,
  pub app_name: &'a str,
  pub support_email: Option<&'a str>,
}
