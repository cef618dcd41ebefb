use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use icon_fetcher::icons;
use icon_fetcher::Downloader;

#[derive(Debug, Parser)]
#[command(name = "icon-fetcher")]
#[command(about = "Download Material Symbols icons at the standard sizes", long_about = None)]
struct Cli {
    /// Icon names to download, e.g. `home settings toggle_on`.
    #[arg(value_name = "NAME", required = true)]
    names: Vec<String>,

    /// Directory the per-icon directories are created under.
    #[arg(short = 'D', long = "dir", default_value = ".", value_name = "DIR")]
    dir: PathBuf,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let downloader = Downloader::new(&cli.dir);

    for name in &cli.names {
        let dir = downloader.prepare_dir(name)?;

        for size in icons::SIZES {
            let url = icons::icon_url(name, size);
            let dest = dir.join(icons::size_file_name(size));

            match downloader.download(&url, &dest) {
                Ok(download) => println!(
                    "Download from {} to {} successful.",
                    download.source,
                    download.file.display()
                ),
                Err(err) => println!("Error: {} ({})", err, url),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    use std::path::PathBuf;

    use clap::Parser;

    use super::Cli;

    #[test]
    fn test_parse_names() {
        let cli = Cli::try_parse_from(["icon-fetcher", "home", "settings"]).unwrap();

        assert_eq!(cli.names, vec!["home", "settings"]);

        assert_eq!(cli.dir, PathBuf::from("."));
    }

    #[test]
    fn test_no_names_is_a_usage_error() {
        assert!(Cli::try_parse_from(["icon-fetcher"]).is_err());
    }

    #[test]
    fn test_parse_output_dir() {
        let cli = Cli::try_parse_from(["icon-fetcher", "-D", "assets/icons", "home"]).unwrap();

        assert_eq!(cli.dir, PathBuf::from("assets/icons"));

        assert_eq!(cli.names, vec!["home"]);
    }
}
