use serenity::all::CreateEmbed;

// Discord caps field values at 1024 characters; leave some room.
pub const FIELD_THRESHOLD: usize = 1000;

/// Splits text into chunks no longer than `threshold`, breaking only between lines.
/// A single line longer than the threshold gets its own chunk.
pub fn create_fields(text: &str, threshold: usize) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        let line = format!("{line}\n");

        if !current.is_empty() && current.len() + line.len() > threshold {
            fields.push(std::mem::take(&mut current));
        }

        current += &line;
    }

    if !current.trim().is_empty() {
        fields.push(current);
    }

    fields
}

pub fn add_fields(mut embed: CreateEmbed, name: &str, fields: &[String]) -> CreateEmbed {
    let count = fields.len();

    for (index, value) in fields.iter().enumerate() {
        let title = if count > 1 {
            format!("{} ({} / {})", name, index + 1, count)
        } else {
            name.to_string()
        };

        embed = embed.field(title, value, false);
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_field() {
        assert_eq!(create_fields("a\nb", FIELD_THRESHOLD), vec!["a\nb\n".to_string()]);
    }

    #[test]
    fn long_text_splits_between_lines() {
        let text = ["aaaa", "bbbb", "cccc"].join("\n");
        let fields = create_fields(&text, 10);

        assert_eq!(fields, vec!["aaaa\nbbbb\n".to_string(), "cccc\n".to_string()]);
        assert!(fields.iter().all(|f| f.len() <= 10));
    }

    #[test]
    fn empty_text_has_no_fields() {
        assert!(create_fields("", FIELD_THRESHOLD).is_empty());
    }
}
