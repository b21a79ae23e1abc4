//! Enclosure selection.
//!
//! A feed entry may carry several enclosures (an audio and a video rendition
//! of the same episode, say). Exactly one is downloaded: the one whose media
//! type matches the earliest entry of the caller's preference list.

use crate::media::item::{Attachment, Enclosure};

/// Outcome of selecting an enclosure for one feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The best-ranked attachment.
    Selected(Attachment),
    /// Nothing matched. `considered` holds the complete attachments that
    /// were ranked and rejected.
    NoneQualify { considered: Vec<Attachment> },
}

impl Selection {
    /// The selected attachment, if any.
    pub fn attachment(self) -> Option<Attachment> {
        match self {
            Selection::Selected(attachment) => Some(attachment),
            Selection::NoneQualify { .. } => None,
        }
    }
}

/// Select the single best enclosure for an entry.
///
/// Only the leading run of complete enclosures is considered: scanning stops
/// at the first enclosure missing an address, length or media type, even if
/// complete ones follow it.
pub fn select_enclosure(enclosures: &[Enclosure], preferences: &[String]) -> Selection {
    let considered: Vec<Attachment> = enclosures.iter().map_while(Enclosure::complete).collect();

    // (preference rank, attachment); an attachment matching several
    // preferences appears once per match.
    let mut ranked: Vec<(usize, &Attachment)> = Vec::new();
    for attachment in &considered {
        for (rank, preference) in preferences.iter().enumerate() {
            if attachment.mime_type.contains(preference.as_str()) {
                ranked.push((rank, attachment));
            }
        }
    }

    // Stable, so equal ranks keep feed order.
    ranked.sort_by_key(|(rank, _)| *rank);

    match ranked.first() {
        Some((_, attachment)) => Selection::Selected((*attachment).clone()),
        None => Selection::NoneQualify { considered },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(url: &str, length: u64, mime_type: &str) -> Enclosure {
        Enclosure {
            url: Some(url.to_string()),
            length: Some(length),
            mime_type: Some(mime_type.to_string()),
        }
    }

    fn prefs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefers_video_over_feed_order() {
        let enclosures = vec![
            enc("http://example.test/ep1.mp3", 100, "audio/mpeg"),
            enc("http://example.test/ep1.mp4", 200, "video/mp4"),
        ];
        let selected = select_enclosure(&enclosures, &prefs(&["video"]))
            .attachment()
            .unwrap();
        assert_eq!(selected.url, "http://example.test/ep1.mp4");
        assert_eq!(selected.length, 200);
    }

    #[test]
    fn test_preference_order_wins() {
        let enclosures = vec![
            enc("http://example.test/ep1.mp4", 200, "video/mp4"),
            enc("http://example.test/ep1.mp3", 100, "audio/mpeg"),
        ];
        let selected = select_enclosure(&enclosures, &prefs(&["audio", "video"]))
            .attachment()
            .unwrap();
        assert_eq!(selected.mime_type, "audio/mpeg");
    }

    #[test]
    fn test_ties_keep_feed_order() {
        let enclosures = vec![
            enc("http://example.test/low.mp4", 100, "video/mp4"),
            enc("http://example.test/high.m4v", 900, "video/x-m4v"),
        ];
        let selected = select_enclosure(&enclosures, &prefs(&["video"]))
            .attachment()
            .unwrap();
        assert_eq!(selected.url, "http://example.test/low.mp4");
    }

    #[test]
    fn test_multiple_matches_use_best_rank() {
        // "video/mp4" matches both "mp4" (rank 1) and "video" (rank 2);
        // "audio/mp4" only matches "mp4" (rank 1) too, and comes first.
        let enclosures = vec![
            enc("http://example.test/a.m4a", 10, "audio/mp4"),
            enc("http://example.test/v.mp4", 20, "video/mp4"),
        ];
        let selected = select_enclosure(&enclosures, &prefs(&["ogg", "mp4", "video"]))
            .attachment()
            .unwrap();
        assert_eq!(selected.url, "http://example.test/a.m4a");
    }

    #[test]
    fn test_incomplete_first_enclosure_stops_scan() {
        let enclosures = vec![
            Enclosure {
                url: Some("http://example.test/ep1.mp4".into()),
                length: None,
                mime_type: Some("video/mp4".into()),
            },
            enc("http://example.test/ep1.m4v", 200, "video/x-m4v"),
        ];
        assert_eq!(
            select_enclosure(&enclosures, &prefs(&["video"])),
            Selection::NoneQualify { considered: vec![] }
        );
    }

    #[test]
    fn test_incomplete_later_enclosure_keeps_earlier_ones() {
        let enclosures = vec![
            enc("http://example.test/ep1.mp3", 100, "audio/mpeg"),
            Enclosure::default(),
            enc("http://example.test/ep1.mp4", 200, "video/mp4"),
        ];
        assert_eq!(
            select_enclosure(&enclosures, &prefs(&["video", "audio"]))
                .attachment()
                .map(|a| a.url),
            Some("http://example.test/ep1.mp3".to_string())
        );
    }

    #[test]
    fn test_nothing_wanted_reports_considered() {
        let enclosures = vec![enc("http://example.test/ep1.pdf", 5, "application/pdf")];
        match select_enclosure(&enclosures, &prefs(&["video"])) {
            Selection::NoneQualify { considered } => {
                assert_eq!(considered.len(), 1);
                assert_eq!(considered[0].mime_type, "application/pdf");
            }
            other => panic!("unexpected selection: {:?}", other),
        }
    }

    #[test]
    fn test_no_enclosures() {
        assert_eq!(
            select_enclosure(&[], &prefs(&["video"])),
            Selection::NoneQualify { considered: vec![] }
        );
    }
}
