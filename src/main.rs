use std::io::{self, Write};

use concurrent_avl::concurrent::{bulk, SharedTree};
use concurrent_avl::config::Config;
use concurrent_avl::timing::{measure, report, TimingRecord};

fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load("concurrent-avl.toml");
    let tree = SharedTree::new();
    let mut timings = TimingRecord::default();

    loop {
        print_menu();
        match read_i64("Select an option: ") {
            1 => populate(&tree, &config, &mut timings),
            2 => show_in_order(&tree, &mut timings),
            3 => search_value(&tree, &mut timings),
            4 => delete_value(&tree, &mut timings),
            5 => show_stats(&tree),
            6 => reset(&tree),
            7 => show_timings(&timings, &config),
            0 => {
                println!("Exiting.");
                break;
            }
            _ => println!("Invalid option, try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("======= CONCURRENT AVL MENU =======");
    println!("1. Build a new AVL tree (concurrent insert)");
    println!("2. Show in-order traversal");
    println!("3. Search a value");
    println!("4. Delete a value");
    println!("5. Show height and node count");
    println!("6. Reset the tree");
    println!("7. Show timing table and save to file");
    println!("0. Exit");
}

fn populate(tree: &SharedTree, config: &Config, timings: &mut TimingRecord) {
    let total = read_i64("How many elements to insert?: ").max(0) as usize;
    let workers = read_i64(&format!("Worker threads [{}]: ", config.workers)).max(0) as usize;
    let workers = if workers == 0 { config.workers } else { workers };
    let min = read_i64(&format!("Minimum key [{}]: ", config.key_min));
    let max = read_i64(&format!("Maximum key [{}]: ", config.key_max));

    let (result, elapsed) = measure(|| bulk::bulk_insert(tree, total, workers, min, max));
    match result {
        Ok(()) => {
            timings.insertion = elapsed;
            println!(
                "Inserted {} unique keys in {:.4} ms",
                total,
                elapsed.as_secs_f64() * 1000.0
            );
        }
        Err(e) => println!("{}", e),
    }
}

fn show_in_order(tree: &SharedTree, timings: &mut TimingRecord) {
    if tree.is_empty() {
        println!("The tree is empty.");
        return;
    }
    let (keys, elapsed) = measure(|| tree.in_order_keys());
    timings.traversal = elapsed;
    let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    println!("In-order traversal: {}", rendered.join(" "));
    println!("Traversal time: {:.4} ms", elapsed.as_secs_f64() * 1000.0);
}

fn search_value(tree: &SharedTree, timings: &mut TimingRecord) {
    if tree.is_empty() {
        println!("The tree is empty.");
        return;
    }
    let value = read_i64("Value to search: ");
    let (depth, elapsed) = measure(|| tree.depth_of(value));
    timings.search = elapsed;
    match depth {
        Some(d) => println!("Value found at depth {}.", d),
        None => println!("Value not found."),
    }
    println!("Search time: {:.4} ms", elapsed.as_secs_f64() * 1000.0);
}

fn delete_value(tree: &SharedTree, timings: &mut TimingRecord) {
    if tree.is_empty() {
        println!("The tree is empty.");
        return;
    }
    let value = read_i64("Value to delete: ");
    let (removed, elapsed) = measure(|| tree.remove(value));
    timings.deletion = elapsed;
    if removed {
        println!("Value deleted.");
    } else {
        println!("The value is not in the tree.");
    }
    println!("Delete time: {:.4} ms", elapsed.as_secs_f64() * 1000.0);
}

fn show_stats(tree: &SharedTree) {
    if tree.is_empty() {
        println!("The tree is empty.");
        return;
    }
    println!("Tree height: {}", tree.height());
    println!("Node count: {}", tree.node_count());
    println!("Approximate memory: {} bytes", tree.approx_memory_bytes());
}

fn reset(tree: &SharedTree) {
    if tree.is_empty() {
        println!("The tree is already empty.");
    } else {
        tree.clear();
        println!("Tree reset.");
    }
}

fn show_timings(timings: &TimingRecord, config: &Config) {
    print!("{}", report::format_summary(timings));
    match report::save_summary(timings, &config.report_path) {
        Ok(()) => println!("Timings saved to '{}'.", config.report_path),
        Err(e) => println!("Could not save the timing file: {}", e),
    }
}

fn read_i64(prompt: &str) -> i64 {
    loop {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            // EOF or a broken stdin reads as "exit".
            Ok(0) | Err(_) => return 0,
            Ok(_) => {}
        }
        match line.trim().parse() {
            Ok(value) => return value,
            Err(_) => println!("Please enter a number."),
        }
    }
}
