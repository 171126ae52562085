use bintree::Tree;
use clap::Parser;

/// Builds a tree from a sequence of keys, prints it, then removes keys one at a time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Keys to insert, in order.
    #[arg(short, long, value_delimiter = ',', default_values_t = [100, 20, 50, 300, 150, 10])]
    keys: Vec<i64>,

    /// Keys to remove after printing the initial tree. May be repeated.
    #[arg(short, long, default_values_t = [20])]
    remove: Vec<i64>,
}

fn print_tree(tree: &Tree<i64>) {
    for key in tree {
        println!("{}", key);
    }
}

fn main() {
    let args = Args::parse();

    let mut tree = Tree::new();
    for key in args.keys {
        tree.insert(key);
    }
    print_tree(&tree);

    println!("----------");
    match tree.minimum() {
        Some(node) => println!("minimum: {}", node.key()),
        None => println!("minimum: <empty>"),
    }

    for key in &args.remove {
        println!("----------");
        match tree.remove(key) {
            Ok(removed) => println!("removed {}", removed),
            Err(e) => eprintln!("cannot remove {}: {}", key, e),
        }
        print_tree(&tree);
    }
}
