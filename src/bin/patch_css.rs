use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::process;

/// Selector the styles hang off. Its presence means the stylesheet was
/// already patched.
const MARKER: &str = ".biomeDestroyedNotification";

const NOTIFICATION_CSS: &str = "
/* Biome destroyed notification */
.biomeDestroyedNotification {
    position: fixed;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    background-color: rgba(0, 0, 0, 0.8);
    border: 3px solid #72CB3B;
    border-radius: 10px;
    padding: 20px;
    z-index: 1000;
    text-align: center;
    animation: fadeInOut 3s forwards;
    max-width: 80%;
}

.biomeDestroyedNotification h3 {
    color: #FFC107;
    margin: 0 0 10px 0;
    font-size: 1.8rem;
}

.biomeDestroyedNotification p {
    margin: 0;
    font-size: 1.2rem;
}
";

/// Append the biome-destroyed notification styles to the game stylesheet.
/// Running it twice is safe; the marker check keeps the block from stacking.
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: patch_css <css_file>");
        process::exit(1);
    }

    let path = &args[1];
    let css = fs::read_to_string(path).expect("Failed to read CSS file");

    if css.contains(MARKER) {
        println!("Notification styles already present in {path}");
        return;
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .expect("Failed to open CSS file for appending");
    file.write_all(NOTIFICATION_CSS.as_bytes())
        .expect("Failed to append notification styles");

    println!("Added notification styles to {path}");
}
