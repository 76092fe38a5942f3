//! Part-of-speech remapping from Google/Mozc tags to MS-IME tags

use std::collections::HashMap;
use std::sync::OnceLock;

/// MS-IME tag used for any Google tag without an entry.
pub const FALLBACK_POS: &str = "名詞";

/// Google/Mozc tag to MS-IME tag pairs.
///
/// Several Google tags collapse onto one MS-IME tag, and some verb classes
/// MS-IME cannot express are demoted to a plain noun.
const POS_PAIRS: [(&str, &str); 93] = [
    ("名詞", "名詞"),
    ("*名詞", "*名詞"),
    ("名詞非接尾", "名詞非接尾"),
    ("短縮よみ", "短縮よみ"),
    ("サジェストのみ", "短縮よみ"),
    ("固有名詞", "固有名詞"),
    ("*固有名詞", "固有名詞"),
    ("固有商品", "固有名詞"),
    ("人名", "人名"),
    ("姓", "姓"),
    ("*姓", "姓"),
    ("名", "名"),
    ("*名", "名"),
    ("組織", "社名"),
    ("地名", "地名"),
    ("国", "国"),
    ("支庁", "支庁"),
    ("県", "県"),
    ("郡", "郡"),
    ("区", "区"),
    ("市", "市"),
    ("町", "町"),
    ("村", "村"),
    ("駅", "駅"),
    ("名詞サ変", "サ行(する)&名詞"),
    ("名詞サ変非接尾", "サ行(する)&名詞"),
    ("名詞ザ変", "サ行(する)&名詞"),
    ("名詞形動", "形容動詞&名詞"),
    ("名サ形動", "サ行(する)&名詞"),
    ("副詞的名詞", "副詞的名詞"),
    ("形容動詞", "形容動詞"),
    ("形容動詞サ変", "形容動詞"),
    ("形容動詞ノ", "形容動詞ノ"),
    ("形容動詞タル", "形容動詞タル"),
    ("数詞", "数詞"),
    ("冠数詞", "冠数詞"),
    ("記号", "単漢字"),
    ("アルファベット", "単漢字"),
    ("顔文字", "顔文字"),
    ("副詞04", "副詞"),
    ("連体詞", "連体詞"),
    ("接続詞", "接続詞"),
    ("感動詞", "感動詞"),
    ("接頭語", "接頭語"),
    ("接頭人名", "姓名接頭語"),
    ("接頭地名", "地名接頭語"),
    ("接頭数詞", "接頭助数詞"),
    ("助数詞", "助数詞"),
    ("接尾語", "接尾語"),
    ("*接尾語", "接尾語"),
    ("接尾人名", "姓名接尾語"),
    ("接尾地名", "地名接尾語"),
    ("動詞ワ行五段名", "ワ行五段"),
    ("動詞ワ行五段", "ワ行五段"),
    ("動詞ワう五段名", "ワ行五段"),
    ("動詞ワう五段", "ワ行五段"),
    ("動詞カ行五段名", "カ行五段"),
    ("動詞カ行五段", "カ行五段"),
    ("動詞カ促五段名", "カ行五段"),
    ("動詞カ促五段", "カ行五段"),
    ("動詞サ行五段名", "サ行五段"),
    ("動詞サ行五段", "サ行五段"),
    ("動詞タ行五段名", "タ行五段"),
    ("動詞タ行五段", "タ行五段"),
    ("動詞ナ行五段名", "名詞"),
    ("動詞ナ行五段", "名詞"),
    ("動詞マ行五段名", "マ行五段"),
    ("動詞マ行五段", "マ行五段"),
    ("動詞ラ行五段名", "ラ行五段"),
    ("動詞ラ行五段", "ラ行五段"),
    ("動詞ラい段名", "ラ行五段"),
    ("動詞ラい五段", "ラ行五段"),
    ("動詞ガ行五段名", "ガ行五段"),
    ("動詞ガ行五段", "ガ行五段"),
    ("動詞バ行五段名", "バ行五段"),
    ("動詞バ行五段", "バ行五段"),
    ("動詞ハ行四段", "名詞"),
    ("動詞一段", "一段動詞"),
    ("一段名詞", "一段&名詞"),
    ("動詞カ変", "名詞"),
    ("動詞サ変", "サ行(する)"),
    ("動詞ザ変", "ザ行(ずる)"),
    ("動詞ラ変", "名詞"),
    ("形容詞", "形容詞"),
    ("形容詞しく", "形容詞"),
    ("形容詞ガル", "形容詞ガル"),
    ("形容詞ュウ", "形容詞ュウ"),
    ("終助詞", "名詞"),
    ("句読点", "単漢字"),
    ("慣用句", "慣用句"),
    ("独立語", "慣用句"),
    ("単漢字", "単漢字"),
    ("抑制単語", "名詞"),
];

fn pos_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| POS_PAIRS.iter().copied().collect())
}

/// Resolve a Google part-of-speech tag to its MS-IME counterpart.
/// Unknown tags resolve to [`FALLBACK_POS`].
pub fn resolve(tag: &str) -> &'static str {
    pos_table().get(tag).copied().unwrap_or(FALLBACK_POS)
}

/// Whether the tag has an explicit entry (as opposed to falling back).
pub fn contains(tag: &str) -> bool {
    pos_table().contains_key(tag)
}

/// Number of Google tags with an explicit mapping.
pub fn len() -> usize {
    pos_table().len()
}
