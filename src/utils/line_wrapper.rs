// 以單字為單位的自動換行

use super::visual_width;

pub struct LineWrapper {
    max_width: usize,
}

impl LineWrapper {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width: max_width.max(1),
        }
    }

    /// 將單字排成不超過寬度的多行；比整行還寬的單字獨佔一行
    pub fn wrap_words<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut wrapped = Vec::new();
        let mut current = String::new();
        let mut current_width = 0;

        for word in words {
            let word_width = visual_width(word);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > self.max_width && !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }

        if !current.is_empty() {
            wrapped.push(current);
        }

        wrapped
    }

    pub fn set_max_width(&mut self, width: usize) {
        self.max_width = width.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_at_word_boundaries() {
        let wrapper = LineWrapper::new(10);
        let lines = wrapper.wrap_words(["alpha", "beta", "gamma", "delta"]);
        assert_eq!(lines, vec!["alpha beta", "gamma", "delta"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let wrapper = LineWrapper::new(5);
        let lines = wrapper.wrap_words(["世界", "ab"]);
        assert_eq!(lines, vec!["世界", "ab"]);
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let mut wrapper = LineWrapper::new(80);
        wrapper.set_max_width(3);
        let lines = wrapper.wrap_words(["a", "abcdef", "b"]);
        assert_eq!(lines, vec!["a", "abcdef", "b"]);
    }

    #[test]
    fn test_no_words_no_lines() {
        let wrapper = LineWrapper::new(10);
        assert!(wrapper.wrap_words(Vec::<&str>::new()).is_empty());
    }
}
