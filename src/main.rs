//! Reads whitespace separated integer keys, builds an AVL tree from them and prints its
//! traversals and a few statistics.
//!
//! ```text
//! $ echo 10 20 30 | avl
//! AVL tree built with 3 nodes
//! Height: 2
//! In-order: 10 20 30
//! Pre-order: 20 10 30
//! Post-order: 10 30 20
//! Root balance factor: 0
//! Valid AVL: yes
//! ```

use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;

use avl::Tree;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// File to read keys from. Reads stdin when absent or `-`.
    #[arg(env = "AVL_INPUT")]
    input: Option<PathBuf>,

    /// The first number is how many keys follow, as in the interactive exercise.
    #[arg(long)]
    counted: bool,

    /// Also draw the tree sideways, right subtree on top.
    #[arg(long)]
    pretty: bool,

    /// Also print node and leaf counts, the key sum, the extremes and both validity checks.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    initialize_logger();
    let cli = Cli::parse();

    let text = read_input(cli.input.as_deref())?;
    let keys = parse_keys(&text, cli.counted)?;
    info!("inserting {} keys", keys.len());

    let tree = Tree::try_from_keys(keys).context("building the tree")?;
    print_report(&tree, cli.pretty);
    if cli.stats {
        println!("Statistics:");
        for (label, value) in statistics(&tree) {
            println!("  {label}: {value}");
        }
    }
    Ok(())
}

/// `RUST_LOG` picks the level; without it only warnings and errors are shown.
fn initialize_logger() {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("reading keys from {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading keys from stdin")?;
            Ok(text)
        }
    }
}

fn parse_keys(text: &str, counted: bool) -> anyhow::Result<Vec<i64>> {
    let mut tokens = text.split_whitespace().enumerate().map(|(i, token)| {
        token
            .parse::<i64>()
            .with_context(|| format!("token {} ({token:?}) is not an integer", i + 1))
    });
    if !counted {
        return tokens.collect();
    }

    let count = match tokens.next() {
        Some(count) => count?,
        None => bail!("expected the number of keys"),
    };
    let count = match usize::try_from(count) {
        Ok(count) if count > 0 => count,
        _ => bail!("invalid number of keys: {count}"),
    };
    let keys = tokens.take(count).collect::<anyhow::Result<Vec<_>>>()?;
    if keys.len() < count {
        bail!("expected {count} keys, found {}", keys.len());
    }
    Ok(keys)
}

fn join<T: Display>(keys: impl Iterator<Item = T>) -> String {
    keys.map(|k| k.to_string()).collect::<Vec<_>>().join(" ")
}

fn print_report(tree: &Tree<i64>, pretty: bool) {
    println!("AVL tree built with {} nodes", tree.count_nodes());
    println!("Height: {}", tree.height());
    println!("In-order: {}", join(tree.in_order()));
    println!("Pre-order: {}", join(tree.pre_order()));
    println!("Post-order: {}", join(tree.post_order()));
    if !tree.is_empty() {
        println!("Root balance factor: {}", tree.balance_factor());
    }
    println!("Valid AVL: {}", yes_no(tree.is_valid_avl()));
    if pretty {
        print!("{}", tree.pretty());
    }
}

fn yes_no(answer: bool) -> &'static str {
    if answer {
        "yes"
    } else {
        "no"
    }
}

/// Labelled figures for `--stats`, in print order.
fn statistics(tree: &Tree<i64>) -> Vec<(&'static str, String)> {
    let extreme = |key: Option<&i64>| key.map_or_else(|| "empty".to_owned(), i64::to_string);

    vec![
        ("Nodes", tree.count_nodes().to_string()),
        ("Leaves", tree.count_leaves().to_string()),
        ("Height", tree.height().to_string()),
        ("Sum of keys", tree.sum_keys::<i64>().to_string()),
        ("Min", extreme(tree.min())),
        ("Max", extreme(tree.max())),
        ("Valid AVL", yes_no(tree.is_valid_avl()).to_owned()),
        ("Valid BST", yes_no(tree.is_valid_bst()).to_owned()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_keys() {
        assert_eq!(parse_keys("3 1\n-2\t7", false).unwrap(), [3, 1, -2, 7]);
        assert!(parse_keys("", false).unwrap().is_empty());
    }

    #[test]
    fn parses_counted_keys() {
        assert_eq!(parse_keys("2 5 6 7", true).unwrap(), [5, 6]);
    }

    #[test]
    fn rejects_bad_tokens() {
        let err = parse_keys("1 two 3", false).unwrap_err();
        assert!(err.to_string().contains("token 2"));
    }

    #[test]
    fn rejects_bad_counts() {
        assert!(parse_keys("", true).is_err());
        assert!(parse_keys("0", true).is_err());
        assert!(parse_keys("-3 1 2 3", true).is_err());
        assert!(parse_keys("3 1 2", true).is_err());
    }

    #[test]
    fn joins_with_spaces() {
        assert_eq!(join([1, 2, 3].iter()), "1 2 3");
        assert_eq!(join(std::iter::empty::<i64>()), "");
    }

    #[test]
    fn statistics_after_rotations() {
        let tree = Tree::try_from_keys([8, 3, 10, 1, 6, 14, 4, 7, 13]).unwrap();

        let stats = statistics(&tree);
        let lines: Vec<_> = stats.iter().map(|(l, v)| format!("{l}: {v}")).collect();
        assert_eq!(
            lines,
            [
                "Nodes: 9",
                "Leaves: 5",
                "Height: 4",
                "Sum of keys: 66",
                "Min: 1",
                "Max: 14",
                "Valid AVL: yes",
                "Valid BST: yes",
            ]
        );
    }

    #[test]
    fn statistics_of_empty_tree() {
        let stats = statistics(&Tree::new());

        assert!(stats.contains(&("Nodes", "0".to_owned())));
        assert!(stats.contains(&("Sum of keys", "0".to_owned())));
        assert!(stats.contains(&("Min", "empty".to_owned())));
        assert!(stats.contains(&("Max", "empty".to_owned())));
        assert!(stats.contains(&("Valid BST", "yes".to_owned())));
    }
}
