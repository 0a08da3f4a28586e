use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use sable::board::Board;
use sable::uci::{parse_position_command, parse_uci_move};

#[test]
fn uci_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_sable");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"uci\nisready\nposition startpos moves e2e4\ngo depth 3\n")
        .unwrap();

    let mut output = String::new();
    let mut bestmove_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            bestmove_line = Some(line);
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let status = child.wait().expect("engine did not exit");
    assert!(status.success());

    assert!(output.contains("id name Sable"));
    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));
    assert!(output.contains("info depth 3"));

    let bestmove = bestmove_line.expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert!(parts.len() >= 2, "bestmove missing move: {}", bestmove);
    let mv = parts[1];
    assert_ne!(mv, "0000", "engine returned null move");

    let mut board = Board::new();
    parse_position_command(&mut board, &["position", "startpos", "moves", "e2e4"]);
    assert!(
        parse_uci_move(&mut board, mv).is_some(),
        "bestmove not legal in position: {}",
        mv
    );
}

#[test]
fn uci_perft_command_reports_node_count() {
    let exe = env!("CARGO_BIN_EXE_sable");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"position startpos\nperft 2\nquit\n")
        .unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("perft depth 2 nodes 400"));
    // One split line per root move
    assert_eq!(
        stdout
            .lines()
            .filter(|l| l.starts_with("info string ") && l.contains(": "))
            .count(),
        20
    );
}

#[test]
fn uci_ignores_unknown_commands() {
    let exe = env!("CARGO_BIN_EXE_sable");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"setoption name Hash value 64\nnonsense\nisready\nquit\n")
        .unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("readyok"));
}
