use tracing::warn;

/// The static list of trading pairs the bot watches.
///
/// Loaded once at startup from a plain-text file, one `BASE/QUOTE` pair per
/// line. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SymbolList {
    symbols: Vec<String>,
}

impl SymbolList {
    /// Load the symbol list from `path`. Exits process on a missing or
    /// unreadable file — an empty watch list is a deployment mistake.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read symbol list at '{path}': {e}"));
        let list = Self::parse(&content);
        if list.is_empty() {
            warn!(path, "Symbol list is empty — no signals will be produced");
        }
        list
    }

    /// Parse file contents: trim each line, skip blanks.
    pub fn parse(content: &str) -> Self {
        let symbols = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        Self { symbols }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let list = SymbolList::parse("BTC/USDT\n\n  ETH/USDT  \n\nSOL/USDT\n");
        let symbols: Vec<&str> = list.iter().collect();
        assert_eq!(symbols, vec!["BTC/USDT", "ETH/USDT", "SOL/USDT"]);
    }

    #[test]
    fn parse_preserves_file_order() {
        let list = SymbolList::parse("ZRX/USDT\nAAVE/USDT\n");
        let symbols: Vec<&str> = list.iter().collect();
        assert_eq!(symbols, vec!["ZRX/USDT", "AAVE/USDT"]);
    }

    #[test]
    fn empty_content_gives_empty_list() {
        let list = SymbolList::parse("\n\n");
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
