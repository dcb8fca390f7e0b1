/// Merges command-style arguments that were split on whitespace but enclosed in quotes.
///
/// A run starts at an argument beginning with `'` or `"` and ends at the next argument ending
/// with the same quote, unless that quote is escaped with a preceding `\`. The arguments of a run
/// are joined with single spaces and their outer quotes removed. Empty arguments are skipped. If
/// the final run is never closed, its arguments are kept as they were given.
///
/// # Examples
/// ```
/// # use dzlib::text::join_quoted;
/// let args = ["hello", "\"world", "is", "cool\"", "nope"];
/// assert_eq!(join_quoted(&args), ["hello", "world is cool", "nope"]);
///
/// let unterminated = ["say", "'hi", "there"];
/// assert_eq!(join_quoted(&unterminated), ["say", "'hi", "there"]);
/// ```
pub fn join_quoted<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    let mut parsed = Vec::with_capacity(args.len());
    let mut run: Vec<&str> = Vec::new();
    let mut quoted = String::new();
    let mut quote: Option<char> = None;

    for arg in args.iter().map(AsRef::as_ref).filter(|arg| !arg.is_empty()) {
        let body = match quote {
            Some(_) => {
                quoted.push(' ');
                arg
            },
            None => match arg.chars().next() {
                Some(open @ ('\'' | '"')) => {
                    quote = Some(open);
                    &arg[open.len_utf8()..]
                },
                _ => {
                    parsed.push(arg.to_owned());
                    continue;
                },
            },
        };
        run.push(arg);

        match quote.and_then(|close| strip_closing(body, close)) {
            Some(inner) => {
                quoted.push_str(inner);
                parsed.push(std::mem::take(&mut quoted));
                run.clear();
                quote = None;
            },
            None => quoted.push_str(body),
        }
    }

    if quote.is_some() {
        parsed.extend(run.into_iter().map(str::to_owned));
    }
    parsed
}

/// Returns `body` without its closing quote, if it ends with an unescaped `close`.
fn strip_closing(body: &str, close: char) -> Option<&str> {
    let inner = body.strip_suffix(close)?;
    (!inner.ends_with('\\')).then_some(inner)
}
