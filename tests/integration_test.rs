use duckyscript::keyboard::{KeyEvent, RecordingKeyboard};
use duckyscript::keys::{KEY_DELETE, KEY_LEFT_ALT, KEY_LEFT_CTRL, KEY_LEFT_SHIFT, KEY_RETURN};
use duckyscript::{Engine, EngineError, Key, resolve};
use std::fs;
use std::process::Command;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn engine() -> (Engine, RecordingKeyboard) {
    let recorder = RecordingKeyboard::new();
    (Engine::new(recorder.clone()), recorder)
}

fn assert_no_held_keys(engine: &Engine) {
    assert!(
        engine.context().active_keys().is_empty(),
        "keys still held: {:?}",
        engine.context().active_keys()
    );
}

#[tokio::test]
async fn test_every_script_ends_with_no_keys_held() {
    let scripts = [
        "PRESS A\nPRESS SHIFT\nPRESS MEDIA_MUTE",
        "PRESS CTRL; PRESS CTRL; STRING x",
        "PRESS GUI\nRELEASE GUI\nPRESS b",
        "CTRL ALT DELETE\nPRESS F5",
        "",
        "REM nothing but comments\n# here",
    ];
    for script in scripts {
        let (mut engine, _) = engine();
        engine.execute(script).await.unwrap();
        assert_no_held_keys(&engine);
    }
}

#[tokio::test]
async fn test_quoted_semicolon_is_typed() {
    let (mut engine, recorder) = engine();
    engine.execute("STRING \"a;b\"").await.unwrap();
    assert_eq!(recorder.events(), vec![KeyEvent::Print("a;b".to_string())]);
}

#[tokio::test]
async fn test_stray_quote_does_not_swallow_next_command() {
    let (mut engine, recorder) = engine();
    engine.execute("PRESS '; ENTER").await.unwrap();

    let quote = Key::Standard(b'\'');
    let enter = Key::Standard(KEY_RETURN);
    assert_eq!(
        recorder.events(),
        vec![
            KeyEvent::Press(quote),
            KeyEvent::Press(enter),
            KeyEvent::Release(enter),
            KeyEvent::Release(quote),
        ]
    );
}

#[tokio::test]
async fn test_rejected_release_is_retried_at_end() {
    let shift = Key::Modifier(KEY_LEFT_SHIFT);
    let recorder = RecordingKeyboard::new().failing_once(KeyEvent::Release(shift));
    let mut engine = Engine::new(recorder.clone());

    let err = engine
        .execute("PRESS SHIFT\nRELEASE SHIFT\nSTRING never")
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("RELEASE SHIFT"));
    assert_eq!(
        recorder.events(),
        vec![KeyEvent::Press(shift), KeyEvent::Release(shift)]
    );
    assert_no_held_keys(&engine);
}

#[tokio::test(start_paused = true)]
async fn test_print_paces_characters() {
    let (mut engine, recorder) = engine();
    engine.execute("PRINT \"hi\"").await.unwrap();

    let events = recorder.timed_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].1, KeyEvent::Write(Key::Standard(b'h')));
    assert_eq!(events[1].1, KeyEvent::Write(Key::Standard(b'i')));
    assert_eq!(events[1].0 - events[0].0, Duration::from_millis(5));
}

#[tokio::test(start_paused = true)]
async fn test_string_is_not_paced() {
    let (mut engine, recorder) = engine();
    let start = tokio::time::Instant::now();
    engine.execute("STRING \"hi\"").await.unwrap();

    let events = recorder.timed_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].1, KeyEvent::Print("hi".to_string()));
    assert_eq!(events[0].0, start);
}

#[tokio::test(start_paused = true)]
async fn test_delay_interval_applies_and_resets() {
    let (mut engine, recorder) = engine();
    engine
        .execute("DELAY INTERVAL 20\nPRINT \"xy\"")
        .await
        .unwrap();
    let events = recorder.timed_events();
    assert_eq!(events[1].0 - events[0].0, Duration::from_millis(20));

    recorder.clear();
    engine.execute("PRINT \"xy\"").await.unwrap();
    let events = recorder.timed_events();
    assert_eq!(events[1].0 - events[0].0, Duration::from_millis(5));
}

#[tokio::test(start_paused = true)]
async fn test_delay_blocks() {
    let (mut engine, recorder) = engine();
    engine.execute("SEND a\nDELAY 250\nSEND b").await.unwrap();
    let events = recorder.timed_events();
    assert_eq!(events[1].0 - events[0].0, Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_bad_delay_is_zero() {
    let (mut engine, recorder) = engine();
    engine.execute("SEND a\nDELAY later\nSEND b").await.unwrap();
    let events = recorder.timed_events();
    assert_eq!(events[1].0, events[0].0);
}

#[tokio::test]
async fn test_modifier_combo() {
    let (mut engine, recorder) = engine();
    engine.execute("CTRL ALT DELETE").await.unwrap();

    let ctrl = Key::Modifier(KEY_LEFT_CTRL);
    let alt = Key::Modifier(KEY_LEFT_ALT);
    let delete = Key::Standard(KEY_DELETE);
    assert_eq!(
        recorder.events(),
        vec![
            KeyEvent::Press(ctrl),
            KeyEvent::Press(alt),
            KeyEvent::Press(delete),
            KeyEvent::Release(ctrl),
            KeyEvent::Release(alt),
            KeyEvent::Release(delete),
        ]
    );
    assert_no_held_keys(&engine);
}

#[tokio::test]
async fn test_bare_release_releases_everything() {
    let (mut engine, recorder) = engine();
    engine.execute("PRESS A; PRESS B; RELEASE").await.unwrap();
    assert_eq!(
        recorder.events(),
        vec![
            KeyEvent::Press(Key::Standard(b'A')),
            KeyEvent::Press(Key::Standard(b'B')),
            KeyEvent::Release(Key::Standard(b'A')),
            KeyEvent::Release(Key::Standard(b'B')),
        ]
    );
    assert_no_held_keys(&engine);
}

#[tokio::test]
async fn test_release_single_key_keeps_others() {
    let (mut engine, recorder) = engine();
    engine
        .execute("PRESS SHIFT\nPRESS a\nRELEASE SHIFT\nSTRING x")
        .await
        .unwrap();
    let shift = Key::Modifier(KEY_LEFT_SHIFT);
    assert_eq!(
        recorder.events(),
        vec![
            KeyEvent::Press(shift),
            KeyEvent::Press(Key::Standard(b'a')),
            KeyEvent::Release(shift),
            KeyEvent::Print("x".to_string()),
            KeyEvent::Release(Key::Standard(b'a')),
        ]
    );
}

#[tokio::test]
async fn test_send_is_untracked_write() {
    let (mut engine, recorder) = engine();
    engine.execute("SEND ENTER\nSEND q").await.unwrap();
    assert_eq!(
        recorder.events(),
        vec![
            KeyEvent::Write(Key::Standard(KEY_RETURN)),
            KeyEvent::Write(Key::Standard(b'q')),
        ]
    );
}

#[tokio::test]
async fn test_media_keys_tracked() {
    let (mut engine, recorder) = engine();
    engine.execute("PRESS MEDIA_PLAY_PAUSE").await.unwrap();
    let play = resolve("MEDIA_PLAY_PAUSE");
    assert_eq!(
        recorder.events(),
        vec![KeyEvent::Press(play), KeyEvent::Release(play)]
    );
}

#[tokio::test]
async fn test_comments_ignored() {
    let (mut engine, recorder) = engine();
    engine
        .execute("REM STRING nope\n# STRING nope\nREM a; STRING yes")
        .await
        .unwrap();
    assert_eq!(recorder.events(), vec![KeyEvent::Print("yes".to_string())]);
}

#[tokio::test]
async fn test_unresolved_key_uses_literal_character() {
    assert_eq!(resolve("q"), Key::Standard(b'q'));

    let (mut engine, recorder) = engine();
    engine.execute("q").await.unwrap();
    assert_eq!(
        recorder.events(),
        vec![
            KeyEvent::Press(Key::Standard(b'q')),
            KeyEvent::Release(Key::Standard(b'q')),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_cancel_during_delay_releases_keys() {
    let cancel = CancellationToken::new();
    let recorder = RecordingKeyboard::new();
    let mut engine = Engine::new(recorder.clone()).with_cancellation(cancel.clone());

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let err = engine
        .execute("PRESS SHIFT\nDELAY 10000\nSTRING never")
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<EngineError>(),
        Some(&EngineError::Cancelled)
    );

    let shift = Key::Modifier(KEY_LEFT_SHIFT);
    assert_eq!(
        recorder.events(),
        vec![KeyEvent::Press(shift), KeyEvent::Release(shift)]
    );
    assert_no_held_keys(&engine);
}

fn run_binary(name: &str, script: &str) -> std::process::Output {
    let script_path = std::env::temp_dir().join(format!("ducky_{name}_{}.txt", std::process::id()));
    fs::write(&script_path, script).expect("Failed to write test script");

    let output = Command::new(env!("CARGO_BIN_EXE_ducky"))
        .arg("--script")
        .arg(&script_path)
        .arg("--quiet")
        .output()
        .expect("Failed to execute ducky");

    let _ = fs::remove_file(&script_path);
    output
}

#[test]
fn test_dry_run_prints_events() {
    let output = run_binary("dry_run", "PRESS SHIFT\nSTRING \"hello; world\"\nGUI r\n");
    assert!(
        output.status.success(),
        "ducky failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "press   SHIFT",
            "print   \"hello; world\"",
            "press   GUI",
            "press   'r'",
            "release GUI",
            "release 'r'",
            "release SHIFT",
        ]
    );
}

#[test]
fn test_missing_script_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_ducky"))
        .arg("--script")
        .arg("/nonexistent/ducky/script.txt")
        .output()
        .expect("Failed to execute ducky");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read script file"),
        "got: {stderr}"
    );
}
