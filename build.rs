//! Embeds the git commit hash into dev builds via `VERGEN_GIT_SHA`.
//! Official builds pass `--features release` and get a clean version
//! string with no git info.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .expect("Failed to add git instructions")
            .emit()
        {
            // Outside a git checkout (e.g. a crates.io build) fall back
            // to a placeholder instead of failing the build.
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
