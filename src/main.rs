use sovran_setitem::{set_item, Dict, List, Value};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut d = Value::from(Dict::new());
    let mut l = Value::from(List::from(vec![Value::from("1"), Value::from("2")]));

    println!("dict:{}", set_item(&mut d, "foo", "bar"));
    println!("d:'{}'", d);

    println!("list:{}", set_item(&mut l, 1, "bar"));
    println!("l:'{}'", l);
}
