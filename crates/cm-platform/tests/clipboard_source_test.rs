use std::sync::Arc;

use cm_core::ports::ClipboardSourcePort;
use cm_platform::clipboard::InMemoryClipboard;

#[test]
fn in_memory_clipboard_is_usable_as_trait_object() {
    let clipboard: Arc<dyn ClipboardSourcePort> = Arc::new(InMemoryClipboard::new());

    assert_eq!(clipboard.read_text().unwrap(), None);

    clipboard.write_text("copied".to_string()).unwrap();
    assert_eq!(clipboard.read_text().unwrap().as_deref(), Some("copied"));
}

#[test]
fn write_is_visible_to_other_handles() {
    let clipboard = Arc::new(InMemoryClipboard::new());
    let writer: Arc<dyn ClipboardSourcePort> = clipboard.clone();
    let reader: Arc<dyn ClipboardSourcePort> = clipboard;

    writer.write_text(String::new()).unwrap();

    // Empty text is still text
    assert_eq!(reader.read_text().unwrap().as_deref(), Some(""));
}

#[test]
fn concurrent_writers_leave_one_of_their_values() {
    let clipboard = Arc::new(InMemoryClipboard::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let clipboard = clipboard.clone();
            std::thread::spawn(move || clipboard.write_text(format!("value-{i}")).unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let text = clipboard.read_text().unwrap().unwrap();
    assert!(text.starts_with("value-"));
}
