// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Markup assembly: the `<piview>` element, its data attributes and the
//! inlined rendering script.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::PiError;
use crate::frame::Frame;
use crate::options::ViewOptions;
use crate::payload::{Fields, RenderPayload};
use crate::token::{RandomTokens, TokenSource};

/// Location of the browser-side renderer shipped with the crate.
const DEFAULT_SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/PiView.js");

/// The rendering script, read from disk every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSource {
    path: PathBuf,
}

impl Default for ScriptSource {
    fn default() -> Self {
        ScriptSource {
            path: PathBuf::from(DEFAULT_SCRIPT),
        }
    }
}

impl ScriptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScriptSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String, PiError> {
        debug!("reading rendering script from {:?}", self.path);
        fs::read_to_string(&self.path).map_err(|source| PiError::ScriptNotFound {
            path: self.path.clone(),
            source,
        })
    }
}

/// A rendered HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The fragment wrapped in the markers the evcxr Jupyter kernel uses to
    /// recognize rich output.
    pub fn evcxr_content(&self) -> String {
        format!("EVCXR_BEGIN_CONTENT text/html\n{}\nEVCXR_END_CONTENT", self.0)
    }

    /// Show the fragment as the output of the current evcxr cell.
    pub fn evcxr_display(&self) {
        println!("{}", self.evcxr_content());
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use inside an attribute value delimited by `quote`.
fn escape_attribute(text: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' if quote == '\'' => escaped.push_str("&#39;"),
            '"' if quote == '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Assemble the page fragment for `payload`, scoped to the element `token`.
pub fn render_markup(payload: &RenderPayload, token: &str, script: &str) -> Result<Html, PiError> {
    let atoms = escape_attribute(&payload.atoms_json()?, '\'');
    let props = escape_attribute(&payload.props_json()?, '\'');
    let inter = escape_attribute(&payload.inter_json()?, '\'');
    let download = match &payload.download {
        Some(filename) => format!("download=\"{}\"", escape_attribute(filename, '"')),
        None => String::new(),
    };
    let (width, height) = (payload.width, payload.height);

    Ok(Html(format!(
        r#"
<html>
<head>
</head>
<body>
<div>
   <piview {download} id='{token}' height='{height}' width='{width}' atoms='{atoms}' props='{props}' inter='{inter}'></piview>
   <script type="module">
       var uuid='{token}';
       {script}
   </script>
</div>
</body>
</html>
"#
    )))
}

/// Renders structures into notebook-ready HTML.
///
/// The token source decides the element identifiers; inject a
/// [`FixedToken`](crate::token::FixedToken) for reproducible output.
pub struct Viewer<T: TokenSource> {
    script: ScriptSource,
    tokens: T,
}

impl Default for Viewer<RandomTokens<rand::rngs::ThreadRng>> {
    fn default() -> Self {
        Viewer::new(ScriptSource::default(), RandomTokens::from_entropy())
    }
}

impl<T: TokenSource> Viewer<T> {
    pub fn new(script: ScriptSource, tokens: T) -> Self {
        Viewer { script, tokens }
    }

    pub fn script(&self) -> &ScriptSource {
        &self.script
    }

    pub fn render(
        &mut self,
        frame: &Frame,
        fields: Fields,
        options: &ViewOptions,
    ) -> Result<Html, PiError> {
        let payload = RenderPayload::build(frame, fields, options)?;
        let token = self.tokens.next_token();
        let script = self.script.read()?;
        render_markup(&payload, &token, &script)
    }
}
