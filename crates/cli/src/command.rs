#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Play(Vec<usize>),
    Discard(Vec<usize>),
    Restart,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();
    let command = match head.to_ascii_lowercase().as_str() {
        "?" | "help" => Command::Help,
        "h" | "hand" | "s" | "status" => Command::Status,
        "p" | "play" => Command::Play(parse_indices(&args)?),
        "d" | "x" | "discard" => Command::Discard(parse_indices(&args)?),
        "new" | "restart" => Command::Restart,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// Accepts `0 2 4`, `0,2,4` and `1-3` forms.
pub fn parse_indices(args: &[&str]) -> Result<Vec<usize>, String> {
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((start, end)) = part.split_once('-') {
                let start = start
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range start".to_string())?;
                let end = end
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range end".to_string())?;
                if start > end {
                    return Err("range start larger than end".to_string());
                }
                indices.extend(start..=end);
            } else {
                let idx = part
                    .parse::<usize>()
                    .map_err(|_| format!("invalid index '{part}'"))?;
                indices.push(idx);
            }
        }
    }
    if indices.is_empty() {
        return Err("missing indices".to_string());
    }
    Ok(indices)
}
