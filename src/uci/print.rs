//! UCI info-line output helpers.

use std::time::Duration;

use crate::board::SearchResult;

pub fn print_search_info(depth: u32, result: &SearchResult, elapsed: Duration) {
    let ms = elapsed.as_millis();
    let nps = if ms > 0 {
        result.nodes * 1000 / ms as u64
    } else {
        result.nodes * 1000
    };
    println!(
        "info depth {} score cp {} nodes {} nps {} time {}",
        depth, result.score, result.nodes, nps, ms
    );
}

pub fn print_perft_info(depth: usize, nodes: u64, elapsed: Duration) {
    println!(
        "info string perft depth {} nodes {} time_ms {}",
        depth,
        nodes,
        elapsed.as_millis()
    );
}
