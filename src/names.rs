/// Every berry pulled when no `--names` override is given.
pub const BERRIES: &[&str] = &[
    "Cheri", "Chesto", "Pecha", "Rawst", "Aspear", "Leppa", "Oran", "Persim", "Lum", "Sitrus",
    "Figy", "Wiki", "Mago", "Aguav", "Iapapa", "Razz", "Bluk", "Nanab", "Wepear", "Pinap",
    "Pomeg", "Kelpsy", "Qualot", "Hondew", "Grepa", "Tamato", "Cornn", "Magost", "Rabuta",
    "Nomel", "Spelon", "Pamtre", "Watmel", "Durin", "Belue", "Occa", "Passho", "Wacan", "Rindo",
    "Yache", "Chople", "Kebia", "Shuca", "Coba", "Payapa", "Tanga", "Charti", "Kasib", "Haban",
    "Colbur", "Babiri", "Chilan", "Liechi", "Ganlon", "Salac", "Petaya", "Apicot", "Lansat",
    "Starf", "Enigma", "Micle", "Custap", "Jaboca", "Rowap",
];

/// Returns the override if one was given, the full berry list otherwise.
pub fn resolve(names: Option<Vec<String>>) -> Vec<String> {
    names.unwrap_or_else(|| BERRIES.iter().map(|name| name.to_string()).collect())
}
