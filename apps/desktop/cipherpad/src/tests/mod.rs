mod logger;
mod repl;
