use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use hint_cards::hints::source;
use hint_cards::{
    load_and_render, Config, DisplayCard, GestureDetector, GroupingMode, HintBoard, HintsError,
    HtmlPage, MessageKind, RevealState, Surface,
};

const HIDDEN: &str = "お色直しが終わった後";

fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests");
    p.push("fixtures");
    p.push(name);
    p
}

fn open_fixture() -> (HintBoard, HtmlPage) {
    let config = Config::default();
    let mut page = HtmlPage::new(config.page.clone());
    let board = load_and_render(fixture_path("hints.csv"), config, GroupingMode::Lenient, &mut page)
        .expect("surface ok")
        .expect("fixture loads");
    (board, page)
}

#[test]
fn fixture_groups_and_hidden_split() {
    let (board, page) = open_fixture();
    let titles: Vec<&str> = board.visible().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, ["最初の扉", "時計の謎"]);
    assert_eq!(board.hidden().map(|g| g.title.as_str()), Some(HIDDEN));
    assert_eq!(page.card_count(), 2);

    let clock = &board.visible()[1];
    assert_eq!(clock.hints[0].text, "長針と短針の\"位置\"に注目。");
    assert_eq!(clock.hints[1].text, "午後\n三時", "quoted newline survives");

    let door = &board.visible()[0];
    assert_eq!(door.hints[1].text, "模様は数字を表している, 左から読む。");
    assert_eq!(door.hints.len(), 3);

    let html = page.content_html();
    assert!(!html.contains(HIDDEN), "hidden group must not render before the reveal");
    assert!(html.contains("&lt;b&gt;4721&lt;/b&gt;"), "answers are text by default");
}

#[test]
fn reveal_needs_exactly_five_triggers() {
    let (mut board, mut page) = open_fixture();
    for i in 1..5 {
        let state = board.trigger(&mut page).expect("trigger");
        assert_eq!(state, RevealState::Locked, "revealed early after {} triggers", i);
        assert_eq!(page.card_count(), 2);
        assert!(page.notices().is_empty());
    }

    assert_eq!(board.trigger(&mut page).expect("trigger"), RevealState::Revealed);
    assert_eq!(page.card_count(), 3);
    assert!(page.content_html().contains(HIDDEN));
    assert_eq!(page.notices(), ["追加ヒントが公開されました。"]);

    for _ in 0..10 {
        assert_eq!(board.trigger(&mut page).expect("trigger"), RevealState::Revealed);
    }
    assert_eq!(page.card_count(), 3, "hidden card appended exactly once");
    assert_eq!(page.notices().len(), 1, "notice shown exactly once");
}

/// Wraps a page and fails the first `fail_appends` card appends and the
/// first `fail_notices` notices.
struct FlakySurface {
    page: HtmlPage,
    fail_appends: usize,
    fail_notices: usize,
}

impl FlakySurface {
    fn new(page: HtmlPage, fail_appends: usize, fail_notices: usize) -> Self {
        Self { page, fail_appends, fail_notices }
    }
}

fn broken_pipe() -> HintsError {
    HintsError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"))
}

impl Surface for FlakySurface {
    fn clear(&mut self) -> hint_cards::Result<()> {
        self.page.clear()
    }

    fn append_card(&mut self, card: &DisplayCard) -> hint_cards::Result<()> {
        if self.fail_appends > 0 {
            self.fail_appends -= 1;
            return Err(broken_pipe());
        }
        self.page.append_card(card)
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) -> hint_cards::Result<()> {
        self.page.show_message(kind, text)
    }

    fn notify(&mut self, text: &str) -> hint_cards::Result<()> {
        if self.fail_notices > 0 {
            self.fail_notices -= 1;
            return Err(broken_pipe());
        }
        self.page.notify(text)
    }
}

#[test]
fn failed_reveal_append_is_retried_on_next_trigger() {
    let (mut board, page) = open_fixture();
    let mut surface = FlakySurface::new(page, 1, 0);
    for _ in 0..4 {
        assert_eq!(board.trigger(&mut surface).expect("trigger"), RevealState::Locked);
    }

    let err = board.trigger(&mut surface).err().expect("append should fail");
    assert!(matches!(err, HintsError::Io(_)), "{}", err);
    assert_eq!(board.reveal_state(), RevealState::Locked, "not revealed until the card is shown");
    assert_eq!(surface.page.card_count(), 2);
    assert!(surface.page.notices().is_empty());

    assert_eq!(board.trigger(&mut surface).expect("retry"), RevealState::Revealed);
    assert_eq!(surface.page.card_count(), 3);
    assert!(surface.page.content_html().contains(HIDDEN));
    assert_eq!(surface.page.notices().len(), 1);

    for _ in 0..3 {
        board.trigger(&mut surface).expect("trigger");
    }
    assert_eq!(surface.page.card_count(), 3, "hidden card appended exactly once");
    assert_eq!(surface.page.notices().len(), 1, "notice shown exactly once");
}

#[test]
fn failed_reveal_notice_does_not_append_card_twice() {
    let (mut board, page) = open_fixture();
    let mut surface = FlakySurface::new(page, 0, 1);
    for _ in 0..4 {
        board.trigger(&mut surface).expect("trigger");
    }
    assert!(board.trigger(&mut surface).is_err(), "notice should fail");
    assert_eq!(board.reveal_state(), RevealState::Locked);
    assert_eq!(surface.page.card_count(), 3, "card already shown");

    assert_eq!(board.trigger(&mut surface).expect("retry"), RevealState::Revealed);
    assert_eq!(surface.page.card_count(), 3, "card not appended again");
    assert_eq!(surface.page.notices().len(), 1);
}

#[test]
fn reveal_is_disarmed_without_hidden_group() {
    let mut config = Config::default();
    config.hidden_title = Some("存在しない".to_string());
    let text = fs::read_to_string(fixture_path("hints.csv")).expect("read fixture");
    let mut board = HintBoard::from_text(&text, config, GroupingMode::Lenient).expect("board");
    let mut page = HtmlPage::new(Default::default());
    board.render_into(&mut page).expect("render");

    assert_eq!(board.visible().len(), 3);
    for _ in 0..10 {
        assert_eq!(board.trigger(&mut page).expect("trigger"), RevealState::Locked);
    }
    assert_eq!(page.card_count(), 3);
    assert!(page.notices().is_empty());
}

#[test]
fn header_only_dataset_shows_empty_message() {
    let config = Config::default();
    let mut page = HtmlPage::new(config.page.clone());
    let board = load_and_render(fixture_path("header_only.csv"), config, GroupingMode::Lenient, &mut page)
        .expect("surface ok");
    assert!(board.is_some(), "an empty dataset is not a load failure");
    assert_eq!(page.card_count(), 0);
    assert_eq!(
        page.content_html(),
        "<div class=\"loading\">ヒントが見つかりませんでした。</div>"
    );
}

#[test]
fn missing_column_is_empty_when_lenient_and_fails_when_strict() {
    let config = Config::default();
    let mut page = HtmlPage::new(config.page.clone());
    let board = load_and_render(fixture_path("missing_column.csv"), config.clone(), GroupingMode::Lenient, &mut page)
        .expect("surface ok");
    assert!(board.is_some());
    assert!(page.content_html().contains("ヒントが見つかりませんでした。"));

    match HintBoard::open(fixture_path("missing_column.csv"), config, GroupingMode::Strict) {
        Err(HintsError::MissingColumn { column }) => assert_eq!(column, "ヒント"),
        other => panic!("expected MissingColumn, got {:?}", other.map(|b| b.visible().len())),
    }
}

#[test]
fn missing_file_replaces_content_with_failure_message() {
    let (_, mut page) = open_fixture();
    assert_eq!(page.card_count(), 2, "page starts with rendered cards");

    let dir = tempfile::tempdir().expect("tempdir");
    let board = load_and_render(dir.path().join("nope.csv"), Config::default(), GroupingMode::Lenient, &mut page)
        .expect("surface ok");
    assert!(board.is_none());
    assert_eq!(page.card_count(), 0);
    assert_eq!(page.content_html(), "<div class=\"loading\">読み込みに失敗しました。</div>");
}

#[test]
fn undecodable_source_is_a_load_failure() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"\xe8\xac,x\n\xff\xfe\xfd").expect("write");
    let err = HintBoard::open(file.path(), Config::default(), GroupingMode::Lenient)
        .err()
        .expect("invalid utf-8 should fail");
    assert!(err.is_load_failure(), "{}", err);
    assert!(matches!(err, HintsError::Decode { encoding: "UTF-8" }));
}

#[test]
fn decode_strips_bom_and_handles_utf16() {
    assert_eq!(source::decode(b"\xEF\xBB\xBFa,b\n").expect("utf-8"), "a,b\n");

    let mut utf16 = vec![0xFF, 0xFE];
    for unit in "謎,x".encode_utf16() {
        utf16.extend_from_slice(&unit.to_le_bytes());
    }
    assert_eq!(source::decode(&utf16).expect("utf-16le"), "謎,x");
}

#[test]
fn bom_prefixed_header_still_matches() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all("\u{feff}謎,ヒント段階,ヒント\r\nA,1,x\r\n".as_bytes()).expect("write");
    let board = HintBoard::open(file.path(), Config::default(), GroupingMode::Strict).expect("board");
    assert_eq!(board.visible().len(), 1);
}

#[test]
fn config_file_overrides_vocabulary() {
    let config = Config::from_toml(
        r#"
        hidden_title = "Secret"
        answer_stage = "answer"
        answer_format = "markup"

        [columns]
        puzzle = "puzzle"
        stage = "hint stage"
        text = "hint text"

        [reveal]
        threshold = 2

        [messages]
        revealed = "Unlocked!"
        "#,
    )
    .expect("valid config");
    assert_eq!(config.labels.badge_suffix, "件", "unset keys keep defaults");

    let csv = "puzzle,hint stage,hint text\nA,1,x\nA,answer,<em>y</em>\nSecret,1,z\n";
    let mut board = HintBoard::from_text(csv, config, GroupingMode::Strict).expect("board");
    let mut page = HtmlPage::new(Default::default());
    board.render_into(&mut page).expect("render");
    assert!(page.content_html().contains("<em>y</em>"));

    board.trigger(&mut page).expect("trigger");
    assert_eq!(board.reveal_state(), RevealState::Locked);
    board.trigger(&mut page).expect("trigger");
    assert_eq!(board.reveal_state(), RevealState::Revealed);
    assert_eq!(page.notices(), ["Unlocked!"]);
}

#[test]
fn bad_config_is_reported() {
    let err = Config::from_toml("reveal = 3").err().expect("type error");
    assert!(matches!(err, HintsError::Config(_)));
    assert!(!err.is_load_failure());
}

#[test]
fn gesture_detector_fires_once_at_threshold() {
    let start = Instant::now();
    let mut detector = GestureDetector::new(3, None);
    assert!(!detector.register(start));
    assert!(!detector.register(start));
    assert!(detector.register(start));
    assert!(detector.has_fired());
    assert!(!detector.register(start));
}

#[test]
fn gesture_detector_resets_after_idle_gap() {
    let start = Instant::now();
    let mut detector = GestureDetector::new(3, Some(Duration::from_millis(500)));
    assert!(!detector.register(start));
    assert!(!detector.register(start + Duration::from_millis(400)));
    assert!(!detector.register(start + Duration::from_millis(1000)), "gap of 600ms restarts the count");
    assert_eq!(detector.count(), 1);
    assert!(!detector.register(start + Duration::from_millis(1200)));
    assert!(detector.register(start + Duration::from_millis(1400)));
}

#[test]
fn zero_threshold_fires_on_first_event() {
    let mut detector = GestureDetector::new(0, None);
    assert!(detector.register(Instant::now()));
}
