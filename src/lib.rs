pub mod atom;
pub mod color;
pub mod edge;
pub mod element;
pub mod error;
pub mod extendedxyzparser;
pub mod formats;
pub mod frame;
pub mod html;
pub mod neighbor;
pub mod options;
pub mod payload;
pub mod property;
pub mod token;
pub mod trajectory;

use error::PiError;
use frame::Frame;
use html::{Html, Viewer};
use options::ViewOptions;
use payload::Fields;

/// Render `frame` with the bundled script and a random element identifier.
pub fn piview(frame: &Frame, fields: Fields, options: &ViewOptions) -> Result<Html, PiError> {
    Viewer::default().render(frame, fields, options)
}
