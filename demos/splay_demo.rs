extern crate env_logger;
extern crate splay_collections;

use splay_collections::splay_tree::{Result, SplaySet};

fn print(title: &str, set: &SplaySet<i32>) {
    println!("{}", title);
    for record in set.traverse() {
        println!("{}", record);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut set = SplaySet::new();
    set.insert(10)?;
    set.insert(5)?;
    set.insert(15)?;
    print("In-order traversal:", &set);

    set.search(&5);
    print("\nAfter splaying 5:", &set);

    set.remove(&10);
    print("\nAfter removing 10:", &set);

    Ok(())
}
