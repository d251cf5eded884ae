#![cfg(unix)]

//! Socket Tests
//!
//! End-to-end tests against a fake daemon listening on a real Unix domain
//! socket in a temporary directory.

use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::PathBuf;
use std::thread;

use speechd_client::error::SpeechdError;
use speechd_client::{Client, Config, Environment};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

struct FixedEnv {
    runtime_dir: Option<PathBuf>,
    user: String,
}

impl Environment for FixedEnv {
    fn runtime_dir(&self) -> Option<PathBuf> {
        self.runtime_dir.clone()
    }

    fn user_name(&self) -> String {
        self.user.clone()
    }
}

/// Accept one connection and run the daemon side of the protocol.
///
/// Returns every command line received, with SPEAK bodies inlined.
fn spawn_fake_daemon(listener: UnixListener) -> thread::JoinHandle<Vec<String>> {
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        handle_connection(stream)
    })
}

fn handle_connection(stream: UnixStream) -> Vec<String> {
    let mut seen = Vec::new();
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut writer = stream;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).unwrap() == 0 {
            break;
        }
        let command = line.trim_end_matches(|c| c == '\r' || c == '\n').to_string();
        seen.push(command.clone());

        if command == "SPEAK" {
            // Consume the body up to and including the terminator line.
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 {
                    return seen;
                }
                let body = line.trim_end_matches(|c| c == '\r' || c == '\n').to_string();
                let done = body == ".";
                seen.push(body);
                if done {
                    break;
                }
            }
            writer
                .write_all(b"225-21\r\n225 OK MESSAGE QUEUED\r\n")
                .unwrap();
        } else if command == "QUIT" {
            break;
        }
        // CANCEL SELF and SET get no reply.
    }

    seen
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_speak_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let socket_path = temp_dir.path().join("speechd.sock");
    let listener = UnixListener::bind(&socket_path).unwrap();
    let daemon = spawn_fake_daemon(listener);

    let config = Config::builder()
        .socket_path(&socket_path)
        .client_name("itest")
        .build();
    let env = FixedEnv {
        runtime_dir: None,
        user: "tester".to_string(),
    };

    let mut client = Client::connect_with(&config, &env).unwrap();
    client.set_client_name("itest").unwrap();
    let id = client.speak("hello daemon", true).unwrap();
    assert_eq!(id, 21);
    client.close();

    let seen = daemon.join().unwrap();
    assert_eq!(
        seen,
        [
            "SET self CLIENT_NAME tester:itest:default",
            "CANCEL SELF",
            "SPEAK",
            "hello daemon",
            ".",
            "QUIT",
        ]
    );
}

#[test]
fn test_default_address_resolution() {
    // Default mode: {runtime_dir}/speech-dispatcher/speechd.sock
    let temp_dir = TempDir::new().unwrap();
    let daemon_dir = temp_dir.path().join("speech-dispatcher");
    std::fs::create_dir_all(&daemon_dir).unwrap();
    let listener = UnixListener::bind(daemon_dir.join("speechd.sock")).unwrap();
    let daemon = spawn_fake_daemon(listener);

    let env = FixedEnv {
        runtime_dir: Some(temp_dir.path().to_path_buf()),
        user: "tester".to_string(),
    };

    let mut client = Client::connect_with(&Config::default(), &env).unwrap();
    client.stop().unwrap();
    client.close();

    let seen = daemon.join().unwrap();
    assert_eq!(seen, ["CANCEL SELF", "QUIT"]);
}

// =============================================================================
// Connect Failure Tests
// =============================================================================

#[test]
fn test_connect_to_missing_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .socket_path(temp_dir.path().join("no-such.sock"))
        .build();
    let env = FixedEnv {
        runtime_dir: None,
        user: "tester".to_string(),
    };

    match Client::connect_with(&config, &env) {
        Err(SpeechdError::Connection { path, .. }) => {
            assert_eq!(path, temp_dir.path().join("no-such.sock"));
        }
        other => panic!("Expected connection error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_default_mode_without_runtime_dir_fails() {
    let env = FixedEnv {
        runtime_dir: None,
        user: "tester".to_string(),
    };

    match Client::connect_with(&Config::default(), &env) {
        Err(SpeechdError::Config(_)) => {}
        other => panic!("Expected config error, got {:?}", other.map(|_| ())),
    }
}
