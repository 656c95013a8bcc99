use gate::backends::virtual_input::{VirtualBackend, VIRTUAL_VERSION};
use gate::native::Version;
use gate::{options, Engine, InitFlags, Lifecycle};
use log::{Level, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps every record logged on the current thread.
struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Run `f` and return the warnings it logged on this thread.
fn warnings_from(f: impl FnOnce()) -> Vec<String> {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in this test binary");
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    f();
    RECORDS.with(|r| {
        r.borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

#[test]
fn unknown_option_logs_one_warning_naming_it() {
    let mut flags = InitFlags::all();
    let warnings = warnings_from(|| flags = options::parse("bogus"));

    assert_eq!(flags, InitFlags::empty());
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("bogus"), "{warnings:?}");
}

#[test]
fn each_unknown_option_gets_its_own_warning() {
    let warnings = warnings_from(|| {
        options::parse("nope video Bogus");
    });
    assert_eq!(warnings.len(), 2, "{warnings:?}");
    assert!(warnings[0].contains("nope"));
    assert!(warnings[1].contains("Bogus"));
}

#[test]
fn known_options_log_no_warning() {
    let warnings = warnings_from(|| {
        options::parse("VIDEO audio everything");
        options::parse("");
    });
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn version_mismatch_logs_a_warning_and_init_succeeds() {
    let backend = VirtualBackend::new().with_linked_version(Version::new(2, 99, 0));
    let mut engine = Engine::new(backend);

    let warnings = warnings_from(|| assert!(engine.init("video").is_ok()));

    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("version mismatch"), "{warnings:?}");
    assert!(warnings[0].contains("2.99.0"), "{warnings:?}");
    assert!(engine.is_initialized());
}

#[test]
fn matching_versions_log_no_warning() {
    let backend = VirtualBackend::new().with_linked_version(VIRTUAL_VERSION);
    let mut engine = Engine::new(backend);

    let warnings = warnings_from(|| assert!(engine.init("video").is_ok()));

    assert!(warnings.is_empty(), "{warnings:?}");
}
