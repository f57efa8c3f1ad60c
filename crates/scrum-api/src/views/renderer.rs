//! HTML rendering with minijinja templates

use std::path::Path;

use minijinja::{Environment, HtmlEscape, context, path_loader};
use tracing::{debug, error, warn};

use scrum_extract::ScrumUpdate;

use crate::errors::{ApiError, Result};

/// Full page with the HTMX form
pub const INDEX_TEMPLATE: &str = "index.html";

/// Fragment swapped in after a form submit (success or error)
pub const RESPONSE_TEMPLATE: &str = "scrum_response.html";

/// Prefix of every error message shown in the response fragment
const ERROR_PREFIX: &str = "Failed to process scrum update";

/// Template renderer
///
/// Templates are read from disk once by [`Views::load`]; a missing or broken
/// template fails there instead of on the first request. HTML autoescaping is
/// enabled for `.html` templates.
pub struct Views {
  env: Environment<'static>,
  index_html: String,
}

impl Views {
  /// Loads and validates all templates from `dir`
  ///
  /// # Errors
  /// Returns a configuration error if the directory or a template is missing,
  /// or a template does not compile
  pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
      return Err(ApiError::config(format!(
        "template directory not found: {}",
        dir.display()
      )));
    }

    let mut env = Environment::new();
    env.set_loader(path_loader(dir.to_path_buf()));

    for name in [INDEX_TEMPLATE, RESPONSE_TEMPLATE] {
      env
        .get_template(name)
        .map_err(|e| ApiError::config(format!("failed to load template {name}: {e}")))?;
    }

    // The index page has no per-request data
    let index_html = env
      .get_template(INDEX_TEMPLATE)
      .and_then(|tmpl| tmpl.render(context! {}))
      .map_err(|e| ApiError::config(format!("failed to render {INDEX_TEMPLATE}: {e}")))?;

    debug!(dir = %dir.display(), "Templates loaded");

    Ok(Self { env, index_html })
  }

  /// The pre-rendered index page
  #[must_use]
  pub fn index(&self) -> &str {
    &self.index_html
  }

  /// Renders the success fragment
  ///
  /// # Errors
  /// Returns an internal error if rendering fails
  pub fn render_success(&self, update: &ScrumUpdate) -> Result<String> {
    self.render(RESPONSE_TEMPLATE, context! { scrum_update => update })
  }

  /// Renders the error fragment for a failure `message`
  ///
  /// The fragment shows `Failed to process scrum update: <message>`.
  ///
  /// # Errors
  /// Returns an internal error if rendering fails
  pub fn render_error(&self, message: &str) -> Result<String> {
    let error = format!("{ERROR_PREFIX}: {message}");
    self.render(RESPONSE_TEMPLATE, context! { error => error })
  }

  /// Renders the response fragment for a processing outcome
  ///
  /// Never fails. A result that cannot be rendered is shown as an error, and
  /// if the error template fails as well a static fragment is returned.
  #[must_use]
  pub fn render_outcome(&self, outcome: &Result<ScrumUpdate>) -> String {
    let message = match outcome {
      Ok(update) => match self.render_success(update) {
        Ok(html) => return html,
        Err(err) => {
          warn!(error = %err, "Success fragment failed to render");
          err.to_string()
        }
      },
      Err(err) => err.to_string(),
    };

    self.render_error(&message).unwrap_or_else(|err| {
      error!(error = %err, "Error fragment failed to render");
      static_error_fragment(&message)
    })
  }

  fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
    self
      .env
      .get_template(name)
      .and_then(|tmpl| tmpl.render(ctx))
      .map_err(|e| ApiError::internal(format!("failed to render {name}: {e}")))
  }
}

fn static_error_fragment(message: &str) -> String {
  format!(
    "<div class=\"result error\" role=\"alert\"><h2>Error</h2><p>{ERROR_PREFIX}: {}</p></div>",
    HtmlEscape(message)
  )
}
