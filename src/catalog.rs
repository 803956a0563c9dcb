/// One entry in the static game table.
#[derive(Debug, Clone, Copy)]
pub struct GameRecord {
    pub app_id: &'static str,
    pub title: &'static str,
    pub developer: &'static str,
}

/// Destination root for the generated library, relative to the working directory.
pub const ROOT_DIR: &str = "games";

/// Marker file written inside each leaf directory.
pub const MARKER_FILE: &str = "dummy.swf";

/// Upper bound on successfully processed records per run.
pub const MAX_GAMES: usize = 100;

const fn rec(
    app_id: &'static str,
    title: &'static str,
    developer: &'static str,
) -> GameRecord {
    GameRecord {
        app_id,
        title,
        developer,
    }
}

/// Ren'Py titles from SteamDB with at least 100 reviews. Developers come from
/// the Steam store pages; the publisher stands in where the developer is
/// unknown, and "Unknown" where neither is clear.
pub const GAMES: &[GameRecord] = &[
    rec("1129190", "Our Life: Beginnings & Always", "GB Patch Games"),
    rec("698780", "Doki Doki Literature Club!", "Team Salvato"),
    rec("2415010", "A Date with Death", "Two and a Half Studios"),
    rec("1989270", "Slay the Princess — The Pristine Cut", "Black Tabby Games"),
    rec("1895350", "I Wani Hug that Gator!", "Cavemanon"),
    rec("1392820", "Milk inside a bag of milk inside a bag of milk", "Nikita Kryukov"),
    rec("1604000", "Milk outside a bag of milk outside a bag of milk", "Nikita Kryukov"),
    rec("1764390", "BAD END THEATER", "NomnomNami"),
    rec("1609230", "Scarlet Hollow", "Black Tabby Games"),
    rec("3068300", "Katawa Shoujo", "Four Leaf Studios"),
    rec("1421250", "Tiny Bunny", "Saikono"),
    rec("1714320", "Find Love or Die Trying", "Audimeow"),
    rec("1126320", "Being a DIK - Season 1", "Dr PinkCake"),
    rec("2318310", "Class of '09: The Re-Up", "SBN3"),
    rec("2443110", "South Scrimshaw, Part One", "Nathan O. Marsh"),
    rec("1765350", "候鸟", "BBX"),
    rec("1997680", "REFLEXIA Prototype ver.", "mahoumaiden"),
    rec("331470", "Everlasting Summer", "Soviet Games"),
    rec("1641270", "枝江往事", "枝江往事开发组"),
    rec("1350650", "FreshWomen - Season 1", "OppaiMan"),
    rec("1232180", "Sakuya Izayoi Gives You Advice And Dabs", "Sigyaad Team"),
    rec("3515380", "YKMET: Strade", "Gatobob"),
    rec("3378000", "Nigudin really fought against Furong Wangyuan", "Hikigeki"),
    rec("1532510", "Purrfect Apawcalypse: Love at Furst Bite", "90% Studios"),
    rec("568770", "Cinderella Phenomenon - Otome/Visual Novel", "Dicesuki"),
    rec("2112520", "her tears were my light", "NomnomNami"),
    rec("1045520", "Acting Lessons", "Dr PinkCake"),
    rec("1688580", "A YEAR OF SPRINGS", "npckc"),
    rec("2403320", "冬日树下的回忆(Memories of the Winter Tree)", "Unknown"),
    rec("1443200", "Class of '09", "SBN3"),
    rec("344770", "fault - milestone two side:above", "ALICE IN DISSONANCE"),
    rec("251990", "Long Live The Queen", "Hanako Games"),
    rec("1768640", "Leap of Faith", "DriftyGames"),
    rec("1430420", "CBT With Yuuka Kazami", "Sigyaad Team"),
    rec("2899050", "Desert Stalker", "Zetan"),
    rec("571880", "Angels with Scaly Wings™ / 鱗羽の天使", "Radical Phi"),
    rec("1111370", "A Summer's End - Hong Kong 1986", "Oracle and Bone"),
    rec("1173010", "Flowers Blooming at the End of Summer", "Midsummer Studio"),
    rec("3585630", "this game will end in 205 clicks.", "Unknown"),
    rec("402620", "Kindred Spirits on the Roof", "Liar-soft"),
    rec("917680", "one night, hot springs", "npckc"),
    rec("3069120", "Love Curse: Find Your Soulmate", "Unknown"),
    rec("2910460", "Furry Angel Take In", "Unknown"),
    rec("1578860", "Billionaire Lovers", "Unknown"),
    rec("753220", "Mhakna Gramura and Fairy Bell", "ALICE IN DISSONANCE"),
    rec("1155970", "Roadwarden", "Moral Anxiety Studio"),
    rec("1708110", "Misericorde: Volume One", "Xeecee"),
    rec("1249880", "Tiny Bunny: Prologue", "Saikono"),
    rec("926340", "Roman's Christmas / 罗曼圣诞探案集", "Unknown"),
    rec("353330", "Love at First Sight", "Creepster"),
    rec("1639610", "Save Me, Sakuya-san!", "Sigyaad Team"),
    rec("1599470", "Purrfect Apawcalypse: Patches' Infurno", "90% Studios"),
    rec("1822190", "Momotype", "Sakevisual"),
    rec("1559430", "Purrfect Apawcalypse: Purrgatory Furever", "90% Studios"),
    rec("1044490", "The Expression Amrilato", "SukeraSparo"),
    rec("1299370", "Friendship with Benefits", "Hunny Bunny Studio"),
    rec("2342920", "OBSCURA", "Foxglove Games"),
    rec("1126310", "风信楼", "Unknown"),
    rec("2386250", "It gets so lonely here", "ebi-hime"),
    rec("2266820", "Lilith Wants to Buy Your Soul", "ebi-hime"),
    rec("642090", "Coming Out on Top", "Obscura"),
    rec("1769320", "Athanasy", "Wirion"),
    rec("710710", "Pizza Game", "Plasterbrain"),
    rec("1058000", "Rain's love memory-雨的恋记", "Unknown"),
    rec("1406040", "Scarlet Hollow — Episode 1", "Black Tabby Games"),
    rec("3574510", "Serre", "ebi-hime"),
    rec("1940040", "The Price Of Flesh", "Gatobob"),
    rec("1296770", "Her New Memory - Hentai Simulator", "Zodiacus Games"),
    rec("1883090", "The Symbiant", "HeartCoreDev"),
    rec("2392230", "The Groom of Gallagher Mansion", "SicklyDove Games"),
    rec("396650", "ACE Academy", "PixelFade"),
    rec("1719310", "Love Sucks: Night Two", "Art Witch Studios"),
    rec("1194740", "MetaWare High School", "Not Fun Games"),
    rec("451760", "Highway Blossoms", "Studio Élan"),
    rec("2936180", "茜色", "Unknown"),
    rec("2302140", "q.u.q.", "Akihabara Games"),
    rec("3100210", "My Sweet! Housemate", "Unknown"),
    rec("2173800", "Projekt: Passion - Season 1", "Classy Lemon"),
    rec("2538910", "夏末白夜", "Unknown"),
    rec("2615670", "Bewitching Sinners", "Critical Bliss"),
    rec("1223810", "Full Service", "HZL"),
    rec("3035990", "Misericorde Volume Two: White Wool & Snow", "Xeecee"),
    rec("822930", "Wolf Tails", "Razzart Visual"),
    rec("2160000", "Trapped with Jester", "Miggy Jagger"),
    rec("2066550", "ERROR143", "Jenny Vi Pham"),
    rec("516600", "Bai Qu: Hundreds of Melodies", "Magenta Factory"),
    rec("2976720", "1 to 1 humanoid edible toys", "Unknown"),
    rec("1724190", "Come Home", "R.J. Rhodes"),
    rec("1450150", "Durka Simulator", "Kopskop Games"),
    rec("3011560", "City Lights Love Bites Season 0 [Pilot Season]", "Unknown"),
    rec("3224310", "you're just imagining it", "Unknown"),
    rec("570840", "家有大貓 Nekojishi", "Studio Klondike"),
    rec("2992240", "Banebush", "Unknown"),
    rec("844660", "Heart of the Woods", "Studio Élan"),
    rec("2738080", "Ignited in Cavern", "Unknown"),
    rec("594130", "Winds of Change", "Klace"),
];
