use structopt::StructOpt;

use text_stack::Stack;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "text-stack",
    about = "Walks through the operations of a linked-list backed stack of strings."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,

    /// The values to seed the first stack with, the last one ends up on top [default: a b c]
    values: Vec<String>,
}

fn show(stack: &Stack) {
    match stack.peek() {
        Some(top) => println!("size = {}, top = '{}'", stack.size(), top),
        None => println!("size = {}, top = none", stack.size()),
    }
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let mut s = if opt.values.is_empty() {
        Stack::from_values(["a", "b", "c"])
    } else {
        Stack::from_values(opt.values)
    };
    show(&s);

    if let Ok(popped) = s.pop() {
        println!("popped '{}', size = {}", popped, s.size());
    }

    s.push("d");
    show(&s);

    while !s.is_empty() {
        s.pop()?;
    }
    show(&s);

    if let Err(e) = s.pop() {
        println!("{}", e);
    }

    let mut s1 = Stack::from_values(["a", "b", "c"]);
    s1.merge(&Stack::from_values(["1", "2", "3"]));
    show(&s1);

    let s2 = Stack::concat(&[
        Stack::from_values(["a", "b", "c"]),
        Stack::from_values(["1", "2", "3"]),
        Stack::from_values(["А", "Б", "В"]),
    ]);
    show(&s2);

    Ok(())
}
