//! Sentiment lexicon tables
//!
//! Valences are on the usual rule-based sentiment scale (-4 .. +4), where the
//! sign is polarity and the magnitude intensity. The word list favors
//! emotional and wellbeing vocabulary over general-purpose coverage.

/// Word valences
pub(crate) const VALENCES: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("blessed", 2.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("cares", 2.0),
    ("caring", 2.2),
    ("celebrate", 2.7),
    ("cheerful", 2.5),
    ("comfortable", 1.5),
    ("confident", 2.2),
    ("cool", 1.3),
    ("delighted", 3.1),
    ("ecstatic", 2.3),
    ("energetic", 1.5),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("free", 2.3),
    ("friend", 2.2),
    ("friends", 2.1),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("motivated", 1.7),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("optimistic", 1.3),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("proud", 2.1),
    ("relaxed", 2.2),
    ("relief", 2.1),
    ("relieved", 1.6),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smile", 1.5),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("sweet", 2.0),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("thrilled", 1.9),
    ("well", 1.1),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yes", 1.7),
    // negative
    ("abandoned", -1.9),
    ("afraid", -2.0),
    ("alone", -1.0),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxiety", -0.7),
    ("anxious", -1.0),
    ("ashamed", -2.1),
    ("attack", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bitter", -1.8),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broken", -2.1),
    ("cried", -1.6),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("crying", -2.1),
    ("danger", -2.4),
    ("dead", -3.3),
    ("depressed", -2.3),
    ("depression", -2.7),
    ("desperate", -1.3),
    ("despair", -1.3),
    ("die", -2.9),
    ("difficult", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusted", -2.4),
    ("disgusting", -2.4),
    ("dread", -2.0),
    ("empty", -0.8),
    ("exhausted", -1.5),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("frustrated", -2.0),
    ("frustrating", -1.9),
    ("furious", -2.7),
    ("gloomy", -0.6),
    ("grief", -2.2),
    ("guilty", -1.8),
    ("hard", -0.4),
    ("hate", -2.7),
    ("hated", -3.2),
    ("heartbroken", -3.3),
    ("helpless", -2.0),
    ("hopeless", -2.0),
    ("horrible", -2.5),
    ("horrified", -2.5),
    ("hostile", -2.2),
    ("hurt", -2.4),
    ("hurts", -2.0),
    ("ill", -1.8),
    ("insecure", -1.8),
    ("isolated", -1.3),
    ("jealous", -2.0),
    ("kill", -3.7),
    ("lonely", -1.5),
    ("loneliness", -1.8),
    ("lost", -1.3),
    ("mad", -2.2),
    ("miserable", -2.2),
    ("nervous", -1.2),
    ("no", -1.2),
    ("numb", -1.4),
    ("pain", -2.3),
    ("painful", -1.9),
    ("panic", -2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("rage", -2.6),
    ("rejected", -1.9),
    ("restless", -1.1),
    ("sad", -2.1),
    ("sadness", -1.9),
    ("scared", -1.9),
    ("shame", -2.1),
    ("sick", -2.3),
    ("sleepless", -1.6),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stressed", -1.4),
    ("stupid", -2.4),
    ("suicide", -3.5),
    ("tears", -0.9),
    ("tense", -1.4),
    ("terrible", -2.1),
    ("terrified", -3.0),
    ("threat", -2.4),
    ("tired", -1.9),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unhappy", -1.8),
    ("unloved", -1.9),
    ("upset", -1.6),
    ("useless", -1.8),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
];

/// Intensity modifiers: positive entries amplify, negative entries dampen
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", INCR),
    ("amazingly", INCR),
    ("awfully", INCR),
    ("completely", INCR),
    ("considerably", INCR),
    ("deeply", INCR),
    ("enormously", INCR),
    ("entirely", INCR),
    ("especially", INCR),
    ("exceptionally", INCR),
    ("extremely", INCR),
    ("fully", INCR),
    ("greatly", INCR),
    ("highly", INCR),
    ("hugely", INCR),
    ("incredibly", INCR),
    ("intensely", INCR),
    ("more", INCR),
    ("most", INCR),
    ("particularly", INCR),
    ("purely", INCR),
    ("quite", INCR),
    ("really", INCR),
    ("remarkably", INCR),
    ("so", INCR),
    ("substantially", INCR),
    ("thoroughly", INCR),
    ("totally", INCR),
    ("tremendously", INCR),
    ("unbelievably", INCR),
    ("unusually", INCR),
    ("utterly", INCR),
    ("very", INCR),
    ("almost", DECR),
    ("barely", DECR),
    ("hardly", DECR),
    ("kinda", DECR),
    ("less", DECR),
    ("little", DECR),
    ("marginally", DECR),
    ("occasionally", DECR),
    ("partly", DECR),
    ("scarcely", DECR),
    ("slightly", DECR),
    ("somewhat", DECR),
    ("sorta", DECR),
];

/// Tokens that flip the polarity of a following sentiment word
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without",
    "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

/// Booster increment
pub(crate) const INCR: f64 = 0.293;
/// Dampener decrement
pub(crate) const DECR: f64 = -0.293;
/// Emphasis added to an ALL-CAPS sentiment word in mixed-case text
pub(crate) const CAPS_INCR: f64 = 0.733;
/// Scale applied to a negated valence
pub(crate) const NEGATION_SCALAR: f64 = -0.74;
