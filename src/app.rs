use crate::api::MetClient;
use crate::display::{self, ArtFrame, DescriptionCard};
use crate::fetch::FetchEvent;

/// Alt text shown while the logo placeholder occupies the frame.
pub const LOGO_ALT: &str = "the MET logo";

/// Notice posted to the description panel after a successful draw.
pub const SELECTED_NOTICE: &str = "Art selected! Press r to reveal it.";

/// Where the two-step select/reveal flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoSelection,
    Selected,
    Displayed,
}

/// What the image slot is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameContent {
    Empty,
    /// A selection exists; the museum logo stands in until reveal.
    Logo,
    Artwork(ArtFrame),
}

/// What the description panel is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum DescContent {
    Empty,
    Notice(String),
    Card(DescriptionCard),
}

/// Main application state.
pub struct App {
    pub client: MetClient,
    pub should_quit: bool,
    pub show_help: bool,
    pub phase: Phase,

    /// Identifier chosen by the most recent successful draw.
    pub selection: Option<u64>,

    /// Server-reported catalog size, for the header.
    pub catalog_total: Option<u64>,

    // The three display handles fetch results write through.
    pub frame: FrameContent,
    pub description: DescContent,
    pub errors: Vec<String>,

    // Status message
    pub status_msg: String,

    /// Stamp of the newest outstanding request. Fetch events carrying
    /// an older stamp are discarded, so the last key press wins.
    fetch_seq: u64,
}

impl App {
    pub fn new(client: MetClient) -> Self {
        Self {
            client,
            should_quit: false,
            show_help: false,
            phase: Phase::NoSelection,
            selection: None,
            catalog_total: None,
            frame: FrameContent::Empty,
            description: DescContent::Empty,
            errors: Vec::new(),
            status_msg: "Press s to draw a random artwork".to_string(),
            fetch_seq: 0,
        }
    }

    /// Start a new random draw. Returns the sequence stamp the fetch
    /// task must report back with.
    pub fn begin_pick(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.status_msg = "Drawing from the catalog...".to_string();
        self.fetch_seq
    }

    /// Start revealing the current selection.
    ///
    /// Returns `None` when nothing is selected yet: no request goes
    /// out and the status line explains, without logging an error.
    pub fn begin_reveal(&mut self) -> Option<(u64, u64)> {
        let Some(id) = self.selection else {
            self.status_msg = "Nothing selected yet. Press s first.".to_string();
            return None;
        };
        self.fetch_seq += 1;
        self.status_msg = format!("Fetching object {id}...");
        Some((self.fetch_seq, id))
    }

    /// Apply a fetch result to the display state.
    pub fn apply_fetch_event(&mut self, event: FetchEvent) {
        if event.seq() != self.fetch_seq {
            return;
        }
        match event {
            FetchEvent::SelectionPicked { id, total, .. } => {
                self.selection = Some(id);
                self.catalog_total = Some(total);
                self.frame = FrameContent::Logo;
                self.description = DescContent::Notice(SELECTED_NOTICE.to_string());
                self.phase = Phase::Selected;
                self.status_msg = format!("Selected object {id}");
            }
            FetchEvent::ArtworkLoaded { record, .. } => {
                self.status_msg = format!("Displaying object {}", record.object_id);
                self.frame = FrameContent::Artwork(display::art_frame(&record));
                self.description = DescContent::Card(display::description_card(&record));
                self.phase = Phase::Displayed;
            }
            FetchEvent::SelectionFailed { message, .. }
            | FetchEvent::ArtworkFailed { message, .. } => {
                self.errors.push(format!("Error: {message}"));
                self.status_msg = "Request failed".to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DEFAULT_BASE_URL, ObjectRecord};

    fn test_app() -> App {
        App::new(MetClient::new(DEFAULT_BASE_URL).unwrap())
    }

    fn vase_record() -> ObjectRecord {
        ObjectRecord {
            object_id: 123,
            title: Some("Vase".to_string()),
            object_date: Some("100 AD".to_string()),
            primary_image: Some("https://images.example/vase.jpg".to_string()),
            medium: Some("Clay".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let app = test_app();
        assert_eq!(app.phase, Phase::NoSelection);
        assert_eq!(app.selection, None);
        assert_eq!(app.frame, FrameContent::Empty);
        assert_eq!(app.description, DescContent::Empty);
        assert!(app.errors.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_begin_pick_bumps_sequence() {
        let mut app = test_app();
        assert_eq!(app.begin_pick(), 1);
        assert_eq!(app.begin_pick(), 2);
    }

    #[test]
    fn test_reveal_without_selection_is_refused() {
        let mut app = test_app();
        assert_eq!(app.begin_reveal(), None);
        // Refusal is guidance, not a failure.
        assert!(app.errors.is_empty());
        assert!(app.status_msg.contains("Press s"));
        assert_eq!(app.phase, Phase::NoSelection);
    }

    #[test]
    fn test_selection_event_updates_display() {
        let mut app = test_app();
        let seq = app.begin_pick();

        app.apply_fetch_event(FetchEvent::SelectionPicked {
            seq,
            id: 77,
            total: 494_000,
        });

        assert_eq!(app.phase, Phase::Selected);
        assert_eq!(app.selection, Some(77));
        assert_eq!(app.catalog_total, Some(494_000));
        assert_eq!(app.frame, FrameContent::Logo);
        assert_eq!(
            app.description,
            DescContent::Notice(SELECTED_NOTICE.to_string())
        );
        assert!(app.errors.is_empty());
    }

    #[test]
    fn test_reveal_event_displays_artwork() {
        let mut app = test_app();
        let seq = app.begin_pick();
        app.apply_fetch_event(FetchEvent::SelectionPicked {
            seq,
            id: 123,
            total: 10,
        });

        let (seq, id) = app.begin_reveal().unwrap();
        assert_eq!(id, 123);

        app.apply_fetch_event(FetchEvent::ArtworkLoaded {
            seq,
            record: vase_record(),
        });

        assert_eq!(app.phase, Phase::Displayed);
        match &app.frame {
            FrameContent::Artwork(art) => assert_eq!(art.alt_text, "Vase (100 AD)"),
            other => panic!("expected artwork frame, got {other:?}"),
        }
        match &app.description {
            DescContent::Card(card) => {
                assert_eq!(card.title_line, "Vase (100 AD)");
                assert_eq!(card.entries[1], "Medium: Clay");
            }
            other => panic!("expected description card, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_appends_error_and_keeps_display() {
        let mut app = test_app();
        let seq = app.begin_pick();
        app.apply_fetch_event(FetchEvent::SelectionPicked {
            seq,
            id: 5,
            total: 10,
        });

        let frame_before = app.frame.clone();
        let desc_before = app.description.clone();

        let (seq, _) = app.begin_reveal().unwrap();
        app.apply_fetch_event(FetchEvent::ArtworkFailed {
            seq,
            message: "request failed with HTTP 502".to_string(),
        });

        assert_eq!(app.errors, vec!["Error: request failed with HTTP 502"]);
        assert_eq!(app.frame, frame_before);
        assert_eq!(app.description, desc_before);
        assert_eq!(app.phase, Phase::Selected);
        assert_eq!(app.selection, Some(5));

        // Errors accumulate rather than replace each other.
        let seq = app.begin_pick();
        app.apply_fetch_event(FetchEvent::SelectionFailed {
            seq,
            message: "boom".to_string(),
        });
        assert_eq!(app.errors.len(), 2);
        assert_eq!(app.errors[1], "Error: boom");
    }

    #[test]
    fn test_stale_event_is_dropped() {
        let mut app = test_app();
        let stale = app.begin_pick();
        let _current = app.begin_pick();

        app.apply_fetch_event(FetchEvent::SelectionPicked {
            seq: stale,
            id: 99,
            total: 10,
        });

        assert_eq!(app.selection, None);
        assert_eq!(app.phase, Phase::NoSelection);
        assert_eq!(app.frame, FrameContent::Empty);
    }

    #[test]
    fn test_stale_failure_logs_nothing() {
        let mut app = test_app();
        let stale = app.begin_pick();
        let _current = app.begin_pick();

        app.apply_fetch_event(FetchEvent::SelectionFailed {
            seq: stale,
            message: "late".to_string(),
        });

        assert!(app.errors.is_empty());
    }

    #[test]
    fn test_redraw_after_display_returns_to_selected() {
        let mut app = test_app();
        let seq = app.begin_pick();
        app.apply_fetch_event(FetchEvent::SelectionPicked {
            seq,
            id: 1,
            total: 10,
        });
        let (seq, _) = app.begin_reveal().unwrap();
        app.apply_fetch_event(FetchEvent::ArtworkLoaded {
            seq,
            record: vase_record(),
        });
        assert_eq!(app.phase, Phase::Displayed);

        let seq = app.begin_pick();
        app.apply_fetch_event(FetchEvent::SelectionPicked {
            seq,
            id: 2,
            total: 10,
        });

        // The old card is cleared so stale metadata cannot linger.
        assert_eq!(app.phase, Phase::Selected);
        assert_eq!(app.selection, Some(2));
        assert_eq!(app.frame, FrameContent::Logo);
        assert_eq!(
            app.description,
            DescContent::Notice(SELECTED_NOTICE.to_string())
        );
    }
}
