//! linemarks demo.
//!
//! Walks through marking, navigating and persisting bookmarks in a scratch
//! workspace under the system temp directory. Set `RUST_LOG=debug` to see the
//! engine's decisions.

use std::fs;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use linemarks::managers::bookmark_collection::{BookmarkCollection, BookmarkCollectionTrait};
use linemarks::services::persistence;
use linemarks::services::state_storage::MemoryStateStorage;
use linemarks::types::events::BookmarkEvent;
use linemarks::types::navigation::{JumpDirection, JumpOutcome};
use linemarks::types::settings::BookmarkSettings;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let root = std::env::temp_dir().join(format!("linemarks-demo-{}", std::process::id()));
    fs::create_dir_all(root.join("src"))?;
    let main_rs = root.join("src").join("main.rs");
    let lib_rs = root.join("src").join("lib.rs");
    fs::write(
        &main_rs,
        "fn main() {\n    let x = 1;\n    println!(\"{}\", x);\n}\n",
    )?;
    fs::write(&lib_rs, "pub fn lib() {}\n")?;

    let root_str = root.to_string_lossy().to_string();
    let main_path = main_rs.to_string_lossy().to_string();
    let lib_path = lib_rs.to_string_lossy().to_string();

    section("Marking lines");
    let mut collection = BookmarkCollection::new(&[root_str.as_str()]);
    collection.subscribe(None, |event| match event {
        BookmarkEvent::Added { bookmark, line, preview } => {
            println!("  + {}:{}  {}", bookmark.path, line, preview)
        }
        BookmarkEvent::Removed { bookmark, line } => println!("  - {}:{}", bookmark.path, line),
        other => println!("  * {:?}", other.kind()),
    });

    collection.set_active(&main_path);
    collection.add_line_to_active(1, "fn main() {")?;
    collection.add_line_to_active(2, "    let x = 1;")?;
    collection.set_active(&lib_path);
    collection.toggle_line_on_active(1, "pub fn lib() {}")?;

    section("Navigating");
    let mut position = (main_path.clone(), 2);
    for _ in 0..3 {
        match collection.next_bookmark(&position.0, position.1, JumpDirection::Forward) {
            JumpOutcome::Found(next) => {
                println!("  → {}:{}", next.path, next.line);
                position = (next.path, next.line);
            }
            JumpOutcome::NoMoreBookmarks => println!("  no more bookmarks"),
        }
    }

    section("Persisting");
    let settings = BookmarkSettings {
        save_bookmarks_in_project: true,
        ..BookmarkSettings::default()
    };
    let mut storage = MemoryStateStorage::new();
    collection.save(&mut storage, &settings)?;
    let project_file = persistence::project_file_path(&root_str, &settings);
    println!("{}", fs::read_to_string(&project_file)?);

    let mut reloaded = BookmarkCollection::new(&[root_str.as_str()]);
    reloaded.load(&storage, &settings)?;
    println!("  reloaded {} marked lines", reloaded.positions().len());

    fs::remove_dir_all(&root)?;
    Ok(())
}
