//! Interactive debounced search over the notebook.

use std::time::Duration;

use anyhow::Result;
use recipenote_core::{Criteria, Debouncer, Notebook, StringStore};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Read query lines from stdin, debounce them, and re-render the matching
/// list each time the input settles.
pub async fn run<S: StringStore>(notebook: &Notebook<S>, delay: Duration) -> Result<()> {
    let debouncer = Debouncer::new(String::new(), delay);
    let mut output = debouncer.subscribe();

    println!("Type to search (empty line shows everything, Ctrl-D exits)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => debouncer.push(line),
                None => break,
            },
            changed = output.changed() => {
                if changed.is_err() {
                    break;
                }
                let query = output.borrow_and_update().clone();
                render(notebook, &query);
            }
        }
    }

    Ok(())
}

fn render<S: StringStore>(notebook: &Notebook<S>, query: &str) {
    let criteria = Criteria {
        query: query.to_string(),
        ..Criteria::default()
    };
    let visible = notebook.visible(&criteria);

    if visible.is_empty() {
        println!("(no matches)");
        return;
    }
    for recipe in &visible {
        println!("{}  {}", recipe.id, recipe.title);
    }
}
