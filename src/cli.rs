use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::post_create::new_post;
use crate::post_publish::publish_post;

#[derive(Parser, Debug)]
#[command(name = "manage", version, about = "Starts and publishes blog posts", long_about = None)]
pub struct Cli {
    /// Config path. Defaults to ./manage.toml, then the user config dir
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the posts. Overrides paths.content_dir from the config
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Starts a new post with the provided slug
    #[command(name = "new-post", visible_aliases = ["new", "new_post"])]
    NewPost(NewPostArgs),
    /// Publishes the post (removes draft & updates date)
    #[command(name = "publish-post", visible_aliases = ["publish", "publish_post"])]
    PublishPost(PublishPostArgs),
}

#[derive(Args, Debug, PartialEq)]
pub struct NewPostArgs {
    /// Post slug, e.g. hello-world
    #[arg(short, long)]
    pub slug: String,
}

#[derive(Args, Debug, PartialEq)]
pub struct PublishPostArgs {
    /// Post directory or its index file, under the content dir
    #[arg(short, long)]
    pub path: PathBuf,

    /// Keep the date the post already has
    #[arg(long)]
    pub keep_date: bool,
}

/// Runs exactly one command against `content_root`
pub fn dispatch(command: Command, content_root: &Path, today: NaiveDate) -> Result<()> {
    match command {
        Command::NewPost(args) => {
            let folder = new_post(content_root, &args.slug, today)?;
            println!("Done! Started new post at {}", folder.display());
        }
        Command::PublishPost(args) => {
            publish_post(content_root, &args.path, args.keep_date)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::error::ErrorKind;
    use tempfile::TempDir;

    use crate::error::ManageError;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("manage").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_new_post_aliases() {
        for name in ["new-post", "new", "new_post"] {
            let cli = parse(&[name, "--slug", "foo"]);
            assert_eq!(cli.command, Some(Command::NewPost(NewPostArgs { slug: "foo".to_string() })));
        }
        let cli = parse(&["new", "-s", "bar"]);
        assert_eq!(cli.command, Some(Command::NewPost(NewPostArgs { slug: "bar".to_string() })));
    }

    #[test]
    fn test_publish_post_aliases() {
        for name in ["publish-post", "publish", "publish_post"] {
            let cli = parse(&[name, "--path", "content/2024-06-01-foo"]);
            let expected = PublishPostArgs { path: PathBuf::from("content/2024-06-01-foo"), keep_date: false };
            assert_eq!(cli.command, Some(Command::PublishPost(expected)));
        }
        let cli = parse(&["publish", "-p", "x", "--keep-date"]);
        let expected = PublishPostArgs { path: PathBuf::from("x"), keep_date: true };
        assert_eq!(cli.command, Some(Command::PublishPost(expected)));
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&["new", "-s", "foo", "--content-dir", "/srv/content", "-c", "my.toml"]);
        assert_eq!(cli.content_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_missing_required_option() {
        let err = Cli::try_parse_from(["manage", "new-post"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = Cli::try_parse_from(["manage", "publish"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_dispatch() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("content");
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let new = Command::NewPost(NewPostArgs { slug: "foo".to_string() });
        dispatch(new, &root, today).unwrap();
        assert!(root.join("2024-06-01-foo").join("index.md").is_file());

        let publish = Command::PublishPost(PublishPostArgs { path: root.join("2024-06-01-foo"), keep_date: false });
        dispatch(publish, &root, today).unwrap();

        let again = Command::NewPost(NewPostArgs { slug: "foo".to_string() });
        let res = dispatch(again, &root, today);
        assert!(matches!(res, Err(ManageError::AlreadyExists(_))));
        assert_eq!(fs::read_dir(&root).unwrap().count(), 1);
    }
}
