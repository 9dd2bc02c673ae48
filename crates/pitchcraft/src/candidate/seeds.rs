/// Built-in seed words for the candidate build
pub const DEFAULT_SEEDS: &[&str] = &[
    "箸", "橋", "端", "雨", "飴", "亀", "瓶", "愛", "青", "赤", "秋", "朝", "足", "味", "汗",
    "油", "家", "池", "石", "椅子", "犬", "命", "海", "駅", "絵", "円", "王", "音", "歌", "馬",
    "機械学習", "人工知能", "深層学習", "自然言語処理", "画像認識",
    "東京", "大阪", "京都", "北海道", "沖縄", "富士山",
    "桜", "寿司", "天ぷら", "忍者", "侍", "相撲", "着物", "漢字", "平仮名", "片仮名",
    "日本", "世界", "平和", "未来", "宇宙", "科学", "技術",
    "数学", "物理", "化学", "生物", "歴史", "地理", "音楽", "美術", "体育", "英語",
];
