use gate::backends::virtual_input::VirtualBackend;
use gate::native::{event_type, keycode, NativeEvent};
use gate::{Engine, Lifecycle};

fn main() {
    env_logger::init();
    let json = std::env::args().any(|a| a == "--json");

    let mut engine = Engine::new(VirtualBackend::new());
    engine.init("video events").expect("virtual init");

    // Script a short session, including input the engine does not model
    let backend = engine.backend_mut();
    backend.key_down(keycode::UP);
    backend.key_up(keycode::UP);
    backend.feed(NativeEvent::other(event_type::MOUSE_MOTION));
    backend.key_down(keycode::W);
    backend.key_down(keycode::SPACE);
    backend.quit_signal();

    while let Some(event) = engine.poll_event() {
        if json {
            println!("{}", serde_json::to_string(&event).expect("serialize event"));
        } else if event.msg.is_empty() {
            println!("(Virtual) unmapped native event");
        } else {
            println!("(Virtual) {:?} {:?} -> {}", event.kind, event.key, event.msg);
        }
        if event.is_shutdown() {
            break;
        }
    }

    engine.uninit();
}
