use gate::{EventKind, Lifecycle};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut engine = gate::create();
    if let Err(err) = engine.init("everything") {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let mut event = gate::Event::default();
    'run: loop {
        while engine.read_event(&mut event) {
            if !event.msg.is_empty() {
                println!("{}", event.msg);
            }
            if event.kind == EventKind::Shutdown {
                break 'run;
            }
        }
        // Sleep a touch to avoid pegging the CPU in the demo
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    engine.uninit();
    ExitCode::SUCCESS
}
