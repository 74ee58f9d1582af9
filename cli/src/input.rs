use std::{fs, path::Path};

use anyhow::Context;
use encoding_rs::Encoding;
use risiko_engine::{ConfigFormat, DiceCount, SessionConfig};

/// Read a text file, honouring a UTF-8/UTF-16 BOM if present.
pub fn read_text_auto(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

pub fn load_session_config(path: &Path) -> anyhow::Result<SessionConfig> {
    let text = read_text_auto(path)?;
    let format = ConfigFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    SessionConfig::parse(&text, format).with_context(|| format!("loading {}", path.display()))
}

/// Config file (if any) with command line values layered on top.
pub fn resolve_session(
    config: Option<&Path>,
    seed: Option<u64>,
    attackers: Option<u8>,
    defenders: Option<u8>,
) -> anyhow::Result<SessionConfig> {
    let mut session = match config {
        Some(path) => load_session_config(path)?,
        None => SessionConfig::default(),
    };
    if seed.is_some() {
        session.seed = seed;
    }
    if let Some(n) = attackers {
        session.attackers = DiceCount::try_from(n)?;
    }
    if let Some(n) = defenders {
        session.defenders = DiceCount::try_from(n)?;
    }
    Ok(session)
}
