use anyhow::Result;
use charlcd_sim::charset;
use serde::Serialize;
use solarlog_glyphs::GlyphName;
use solarlog_locale::{Language, MessageKey};

/// Display assets of one language, as written by `solarlog export`
#[derive(Debug, Serialize)]
pub struct AssetExport {
    pub language: &'static str,
    pub glyphs: Vec<GlyphExport>,
    pub strings: Vec<StringExport>,
}

#[derive(Debug, Serialize)]
pub struct GlyphExport {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: [u8; 8],
}

#[derive(Debug, Serialize)]
pub struct StringExport {
    pub key: &'static str,
    pub text: &'static str,
    /// Character ROM codes the text is sent as
    pub codes: Vec<u8>,
}

impl AssetExport {
    pub fn collect(language: Language) -> Result<Self> {
        let glyphs = GlyphName::ALL
            .into_iter()
            .map(|name| GlyphExport {
                name: name.name(),
                description: name.description(),
                rows: *name.glyph().rows(),
            })
            .collect();

        let strings = MessageKey::ALL
            .into_iter()
            .map(|key| {
                let text = language.text(key);
                Ok(StringExport {
                    key: key.macro_name(),
                    text,
                    codes: charset::encode(text)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            language: language.code(),
            glyphs,
            strings,
        })
    }
}

pub fn run_export(language: Language) -> Result<()> {
    let export = AssetExport::collect(language)?;
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
