//! Raw counter key parsing.
//!
//! Epic's stats service reports Battle Royale counters as flat keys shaped
//! like `br_placetop1_keyboardmouse_m0_playlist_defaultsolo`. The parser
//! decomposes one key into (stat kind, input device, playlist token) and
//! yields nothing for keys that do not fit; unrelated keys in the same map
//! are a normal occurrence, not an error.

use crate::stats::types::StatKind;

/// The decomposed form of one recognized counter key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatKey {
    pub kind: StatKind,
    pub input_device: String,
    pub playlist_token: String,
}

/// Parse one raw counter key.
///
/// Expected shape: `<namespace>_<statKind>_<inputDevice>_<variant>_playlist_<token>`,
/// where the playlist token may itself contain underscores
/// (`nobuildbr_squad`, `respawn_nobuild`). Returns `None` for any other
/// shape and for stat kinds outside the whitelist.
pub fn parse_stat_key(key: &str) -> Option<ParsedStatKey> {
    let parts: Vec<&str> = key.split('_').collect();
    if parts.len() < 6 || parts[4] != "playlist" {
        return None;
    }

    let kind = StatKind::from_key_token(&parts[1].to_ascii_lowercase())?;
    let playlist_token = parts[5..].join("_").to_ascii_lowercase();
    if playlist_token.is_empty() {
        return None;
    }

    Some(ParsedStatKey {
        kind,
        input_device: parts[2].to_ascii_lowercase(),
        playlist_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_key() {
        let parsed = parse_stat_key("br_kills_keyboardmouse_m0_playlist_defaultsolo").unwrap();
        assert_eq!(parsed.kind, StatKind::Kills);
        assert_eq!(parsed.input_device, "keyboardmouse");
        assert_eq!(parsed.playlist_token, "defaultsolo");
    }

    #[test]
    fn parses_wins_from_placetop1() {
        let parsed = parse_stat_key("br_placetop1_gamepad_m0_playlist_defaultduo").unwrap();
        assert_eq!(parsed.kind, StatKind::Wins);
        assert_eq!(parsed.input_device, "gamepad");
    }

    #[test]
    fn keeps_underscores_in_playlist_token() {
        let parsed =
            parse_stat_key("br_matchesplayed_touch_m0_playlist_nobuildbr_squad").unwrap();
        assert_eq!(parsed.playlist_token, "nobuildbr_squad");

        let parsed =
            parse_stat_key("br_score_keyboardmouse_m0_playlist_respawn_nobuild").unwrap();
        assert_eq!(parsed.playlist_token, "respawn_nobuild");
    }

    #[test]
    fn rejects_unknown_stat_kind() {
        assert!(parse_stat_key("br_placetop10_keyboardmouse_m0_playlist_defaultsolo").is_none());
        assert!(parse_stat_key("br_lastmodified_keyboardmouse_m0_playlist_defaultsolo").is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        // no playlist marker in position 4
        assert!(parse_stat_key("br_kills_keyboardmouse_defaultsolo").is_none());
        assert!(parse_stat_key("br_kills_keyboardmouse_m0_arena_defaultsolo").is_none());
        // too short
        assert!(parse_stat_key("br_kills").is_none());
        assert!(parse_stat_key("").is_none());
        // marker present but no token
        assert!(parse_stat_key("br_kills_keyboardmouse_m0_playlist_").is_none());
    }

    #[test]
    fn normalizes_case() {
        let parsed = parse_stat_key("br_Kills_KeyboardMouse_m0_playlist_DefaultSolo").unwrap();
        assert_eq!(parsed.kind, StatKind::Kills);
        assert_eq!(parsed.input_device, "keyboardmouse");
        assert_eq!(parsed.playlist_token, "defaultsolo");
    }
}
