//! The `eval` command: force one expression against a loaded script.

use gx_eval::{EvalError, Interpreter};

/// Debug form of `source`, followed by the rendering of anything it drew.
pub fn eval_expr(interp: &mut Interpreter, source: &str) -> Result<String, EvalError> {
    interp.screen_mut().clear();
    let value = interp.eval(source)?;
    let mut text = interp.display(value)?;
    text.push('\n');
    text.push_str(&interp.screen().render_ascii());
    Ok(text)
}
