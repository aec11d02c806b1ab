//! Checkers on the command line.
//!
//! - `checkers play`  - play the dark pieces against a bot
//! - `checkers bots`  - simulate bot-vs-bot games and print a tally
//! - `checkers perft` - count move paths from the initial position

use checkers_agents::{Agent, GreedyAgent, RandomAgent};
use checkers_core::{perft, perft_divide, Game, GameResult, Move, Piece, Rank, Side, Square};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "checkers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a bot; you move the dark pieces
    Play {
        /// Half-board size; the board is a square of side 2 * size + 2
        #[arg(long, default_value_t = 3)]
        size: usize,
        /// Bot to play against
        #[arg(long, value_enum, default_value = "greedy")]
        opponent: BotKind,
    },
    /// Simulate bot-vs-bot games and print a tally
    Bots {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value_t = 100)]
        num_games: usize,
        /// Bot playing the dark pieces
        #[arg(long, value_enum, default_value = "random")]
        dark: BotKind,
        /// Bot playing the light pieces
        #[arg(long, value_enum, default_value = "random")]
        light: BotKind,
        /// Half-board size
        #[arg(long, default_value_t = 3)]
        size: usize,
    },
    /// Count move paths from the initial position
    Perft {
        /// Search depth in plies
        depth: u8,
        /// Half-board size
        #[arg(long, default_value_t = 3)]
        size: usize,
        /// Break the count down by first move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotKind {
    Random,
    Greedy,
}

fn make_agent(kind: BotKind) -> Box<dyn Agent> {
    match kind {
        BotKind::Random => Box::new(RandomAgent::new()),
        BotKind::Greedy => Box::new(GreedyAgent::new()),
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::Dark => "Dark",
        Side::Light => "Light",
    }
}

fn piece_char(piece: Piece) -> char {
    match (piece.side, piece.rank) {
        (Side::Dark, Rank::Man) => 'x',
        (Side::Dark, Rank::King) => 'X',
        (Side::Light, Rank::Man) => 'o',
        (Side::Light, Rank::King) => 'O',
    }
}

fn display_board(game: &Game) {
    print!("   ");
    for col in 0..game.dims() {
        print!("{col} ");
    }
    println!();

    for (row, cells) in game.to_piece_grid().iter().enumerate() {
        print!("{row:2} ");
        for cell in cells {
            match cell {
                Some(piece) => print!("{} ", piece_char(*piece)),
                None => print!(". "),
            }
        }
        println!();
    }

    println!(
        "\n{} to move (move {}, {} quiet)",
        side_name(game.turn()),
        game.move_count(),
        game.draw_clock()
    );
}

/// Parses `row,col row,col [...]` into squares: the piece to move first,
/// then each landing in order.
fn parse_squares(input: &str) -> Option<Vec<Square>> {
    let mut squares = Vec::new();
    for token in input.split_whitespace() {
        let (row, col) = token.split_once(',')?;
        let row = row.trim().parse().ok()?;
        let col = col.trim().parse().ok()?;
        squares.push(Square::new(row, col));
    }
    if squares.len() >= 2 {
        Some(squares)
    } else {
        None
    }
}

fn print_legal_moves(game: &Game) {
    for (id, moves) in game.player_legal_moves(game.turn()) {
        if let Some(piece) = game.piece(id) {
            let formatted: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
            println!("  {}: {}", piece.square, formatted.join(" | "));
        }
    }
}

fn play(size: usize, opponent: BotKind) {
    let mut game = Game::new(size);
    let mut bot = make_agent(opponent);
    let human = Side::Dark;

    println!(
        "Checkers - you play the dark pieces (x/X) against {}.",
        bot.name()
    );
    println!("Enter a move as `row,col row,col [...]`: the piece first, then every landing.");
    println!("Commands: 'moves', 'offer' (offer a draw), 'accept' (accept one), 'quit'");

    loop {
        display_board(&game);
        if let Some(result) = game.get_winner() {
            println!("{result}");
            break;
        }

        if game.turn() == human {
            let legal = game.player_legal_moves(human);
            let must_jump = legal.iter().any(|(id, moves)| {
                game.piece(*id).map_or(false, |piece| {
                    moves.iter().any(|mv| mv.is_jump_from(piece.square))
                })
            });
            if must_jump {
                println!("A capture is available: you must jump.");
            }

            print!("Your move: ");
            io::stdout().flush().unwrap();
            let mut input = String::new();
            if io::stdin().read_line(&mut input).map_or(true, |read| read == 0) {
                break;
            }
            let input = input.trim();

            match input {
                "quit" => break,
                "moves" => {
                    print_legal_moves(&game);
                    continue;
                }
                "offer" => {
                    game.offer_draw();
                    println!("Draw offered.");
                    continue;
                }
                "accept" => {
                    game.accept_draw();
                    continue;
                }
                _ => {}
            }

            let squares = match parse_squares(input) {
                Some(squares) => squares,
                None => {
                    println!("Could not read that; try something like `5,2 4,3`.");
                    continue;
                }
            };
            let id = match game.board().get(squares[0]) {
                Ok(id) => id,
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            };
            let mv = Move::new(squares[1..].to_vec());
            if let Err(error) = game.move_piece(id, &mv) {
                println!("{error}");
            }
        } else {
            match bot.choose_move(&game) {
                Some((id, mv)) => {
                    let origin = game.piece(id).map(|piece| piece.square);
                    if game.move_piece(id, &mv).is_ok() {
                        if let Some(origin) = origin {
                            println!("{} plays {} -> {mv}", bot.name(), origin);
                        }
                    }
                }
                None => break,
            }
        }
    }
}

fn simulate(dark: BotKind, light: BotKind, size: usize, num_games: usize) {
    let dark_name = make_agent(dark).name().to_string();
    let light_name = make_agent(light).name().to_string();

    let mut dark_wins = 0usize;
    let mut light_wins = 0usize;
    let mut draws = 0usize;

    for _ in 0..num_games {
        let mut dark_agent = make_agent(dark);
        let mut light_agent = make_agent(light);
        let mut game = Game::new(size);

        let result = loop {
            if let Some(result) = game.get_winner() {
                break result;
            }
            let agent = if game.turn() == Side::Dark {
                &mut dark_agent
            } else {
                &mut light_agent
            };
            match agent.choose_move(&game) {
                Some((id, mv)) => {
                    if game.move_piece(id, &mv).is_err() {
                        break GameResult::Win(game.turn().opponent());
                    }
                }
                None => break GameResult::Win(game.turn().opponent()),
            }
        };

        match result {
            GameResult::Win(Side::Dark) => dark_wins += 1,
            GameResult::Win(Side::Light) => light_wins += 1,
            GameResult::Draw => draws += 1,
        }
    }

    let total = num_games.max(1) as f64;
    println!(
        "Dark ({}) wins: {:.2}%",
        dark_name,
        100.0 * dark_wins as f64 / total
    );
    println!(
        "Light ({}) wins: {:.2}%",
        light_name,
        100.0 * light_wins as f64 / total
    );
    println!("Draws: {:.2}%", 100.0 * draws as f64 / total);
}

fn run_perft(depth: u8, size: usize, divide: bool) {
    let game = Game::new(size);

    if divide {
        let results = perft_divide(&game, depth);
        let mut total = 0u64;
        for (id, mv, nodes) in &results {
            if let Some(piece) = game.piece(*id) {
                println!("{} -> {}: {}", piece.square, mv, nodes);
            }
            total += *nodes;
        }
        println!("\nTotal: {total}");
    } else {
        let start = std::time::Instant::now();
        let nodes = perft(&game, depth);
        let elapsed = start.elapsed();

        println!("Nodes: {nodes}");
        println!("Time: {:.2}s", elapsed.as_secs_f64());
        println!("NPS: {:.0}", nodes as f64 / elapsed.as_secs_f64());
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size, opponent } => play(size, opponent),
        Commands::Bots {
            num_games,
            dark,
            light,
            size,
        } => simulate(dark, light, size, num_games),
        Commands::Perft {
            depth,
            size,
            divide,
        } => run_perft(depth, size, divide),
    }
}
