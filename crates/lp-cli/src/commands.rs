use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and persist the session tokens
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Invalidate the session locally and server-side
    Logout,

    /// Show the current session snapshot
    Whoami,

    /// Authenticated GET against an API path
    Get { path: String },

    /// Authenticated POST against an API path
    Post {
        path: String,

        /// JSON request body
        #[arg(long, default_value = "{}")]
        body: String,
    },
}
