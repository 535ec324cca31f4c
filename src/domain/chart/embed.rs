//! Self-contained embeddable HTML document around a serialized spec.
//!
//! The output is meant for a sandboxed `allow-scripts` iframe: it pulls
//! the Vega runtime from the CDN, inlines the spec JSON, and mounts the
//! chart on a fixed div. No network I/O happens at construction time.

use super::spec::VegaLiteSpec;
use crate::domain::errors::AppError;

const VEGA_CDN: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED_CDN: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

/// Mount point id inside the generated page.
pub const MOUNT_ID: &str = "vis";

pub struct EmbedDocument;

impl EmbedDocument {
    /// Wrap a spec into a complete HTML page.
    pub fn render(spec: &VegaLiteSpec) -> Result<String, AppError> {
        let json = spec.to_json()?;
        Ok(format!(
            r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <script src="{VEGA_CDN}"></script>
  <script src="{VEGA_LITE_CDN}"></script>
  <script src="{VEGA_EMBED_CDN}"></script>
</head>
<body>
  <div id="{MOUNT_ID}"></div>
  <script>
    const spec = {json};
    vegaEmbed("#{MOUNT_ID}", spec).catch(console.error);
  </script>
</body>
</html>
"##
        ))
    }
}
