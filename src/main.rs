use std::io::{self, BufRead, Write};
use std::time::Instant;

use sable::board::{self, search, Board};
use sable::uci::command::{parse_go_params, parse_uci_command, UciCommand};
use sable::uci::parse_position_command;
use sable::uci::print::{print_perft_info, print_search_info};

const DEFAULT_DEPTH: u32 = 5;

fn main() {
    // Build the attack tables before the first command needs them
    board::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut board = Board::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => {
                println!("id name Sable");
                println!("id author Sable developers");
                println!("uciok");
            }
            UciCommand::IsReady => {
                println!("readyok");
            }
            UciCommand::UciNewGame => {
                board = Board::new();
            }
            UciCommand::Position(parts) => {
                let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut board, &refs);
            }
            UciCommand::Go(parts) => {
                let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
                let depth = parse_go_params(&refs).depth.unwrap_or(DEFAULT_DEPTH);

                let start = Instant::now();
                let result = search(&mut board, depth);
                print_search_info(depth, &result, start.elapsed());

                match result.best_move {
                    Some(best) => println!("bestmove {best}"),
                    None => println!("bestmove 0000"),
                }
            }
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let mut total = 0;
                for (mv, nodes) in board.perft_divide(depth) {
                    println!("info string {mv}: {nodes}");
                    total += nodes;
                }
                print_perft_info(depth, total, start.elapsed());
            }
            UciCommand::Quit => break,
            UciCommand::Unknown(_) => {
                // Silently ignore unrecognized commands
            }
        }

        let _ = stdout.flush();
    }
}
