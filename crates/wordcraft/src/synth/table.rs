//! Curated table of misspellings people actually make.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static KNOWN_MISSPELLINGS: Lazy<HashMap<&'static str, [&'static str; 2]>> = Lazy::new(|| {
    [
        ("beautiful", ["beutiful", "beautifull"]),
        ("definitely", ["definately", "definatly"]),
        ("separate", ["seperate", "seperat"]),
        ("receive", ["recieve", "receeve"]),
        ("believe", ["beleive", "belive"]),
        ("achieve", ["acheive", "acheeve"]),
        ("because", ["becuase", "beacuse"]),
        ("friend", ["freind", "frend"]),
        ("business", ["buisness", "busness"]),
        ("government", ["goverment", "govermant"]),
        ("environment", ["enviroment", "enviroment"]),
        ("necessary", ["neccessary", "necesary"]),
        ("occasionally", ["ocassionally", "ocasionally"]),
        ("successful", ["sucessful", "succesful"]),
        ("embarrass", ["embarass", "embarras"]),
        ("accommodate", ["accomodate", "accomadate"]),
        ("recommend", ["reccomend", "recomend"]),
        ("occurred", ["occured", "ocurred"]),
        ("privilege", ["priviledge", "privilige"]),
        ("maintenance", ["maintainance", "maintenence"]),
        ("conscious", ["concious", "consious"]),
        ("apparent", ["apparant", "apparrent"]),
        ("argument", ["arguement", "arguement"]),
        ("calendar", ["calender", "calandar"]),
        ("category", ["catagory", "catagory"]),
        ("cemetery", ["cemetary", "cemetary"]),
        ("changeable", ["changable", "changable"]),
        ("colleague", ["collegue", "collegue"]),
        ("committed", ["comitted", "comitted"]),
        ("committee", ["comittee", "comittee"]),
        ("competition", ["compitition", "compitition"]),
        ("convenient", ["convinient", "convinient"]),
        ("criticism", ["criticisim", "criticisim"]),
        ("curiosity", ["curiousity", "curiousity"]),
        ("desperate", ["desparate", "desparate"]),
        ("dictionary", ["dictionery", "dictionery"]),
        ("disappear", ["dissapear", "dissapear"]),
        ("exaggerate", ["exagerate", "exagerate"]),
        ("excellent", ["excelent", "excelent"]),
        ("existence", ["existance", "existance"]),
        ("experience", ["experiance", "experiance"]),
        ("familiar", ["familier", "familier"]),
        ("fascinating", ["fasinating", "fasinating"]),
        ("finally", ["finaly", "finaly"]),
        ("foreign", ["foriegn", "foriegn"]),
        ("foreseeable", ["forseeable", "forseeable"]),
        ("forty", ["fourty", "fourty"]),
        ("forward", ["forword", "forword"]),
        ("further", ["farther", "farther"]),
        ("grateful", ["greatful", "greatful"]),
        ("guarantee", ["gaurantee", "gaurantee"]),
        ("guard", ["gaurd", "gaurd"]),
        ("guidance", ["guidence", "guidence"]),
        ("happened", ["happend", "happend"]),
        ("harass", ["harrass", "harrass"]),
        ("height", ["hieght", "hieght"]),
        ("immediately", ["immediatly", "immediatly"]),
        ("independent", ["independant", "independant"]),
        ("intelligent", ["intellegent", "intellegent"]),
        ("interest", ["intrest", "intrest"]),
        ("interrupt", ["interupt", "interupt"]),
        ("irresistible", ["irresistable", "irresistable"]),
        ("knowledge", ["knowlege", "knowlege"]),
        ("library", ["libary", "libary"]),
        ("lightning", ["lightening", "lightening"]),
        ("lonely", ["lonly", "lonly"]),
        ("lose", ["loose", "loose"]),
        ("mathematics", ["mathmatics", "mathmatics"]),
        ("medicine", ["medecine", "medecine"]),
        ("million", ["milion", "milion"]),
        ("minute", ["minuet", "minuet"]),
        ("miscellaneous", ["miscellanious", "miscellanious"]),
        ("misspell", ["mispell", "mispell"]),
        ("neighbor", ["neighbour", "neighbour"]),
        ("noticeable", ["noticable", "noticable"]),
        ("occasion", ["ocassion", "ocassion"]),
        ("official", ["offical", "offical"]),
        ("opinion", ["opion", "opion"]),
        ("opportunity", ["oppertunity", "oppertunity"]),
        ("optimistic", ["optimisic", "optimisic"]),
        ("original", ["orignal", "orignal"]),
        ("parallel", ["paralell", "paralell"]),
        ("particular", ["particualr", "particualr"]),
        ("perceive", ["percieve", "percieve"]),
        ("performance", ["performence", "performence"]),
        ("permanent", ["permanant", "permanant"]),
        ("personal", ["personel", "personel"]),
        ("personnel", ["personel", "personel"]),
        ("physical", ["phisical", "phisical"]),
        ("piece", ["peice", "peice"]),
        ("pleasant", ["plesant", "plesant"]),
        ("politician", ["politican", "politican"]),
        ("position", ["posistion", "posistion"]),
        ("possible", ["posible", "posible"]),
        ("practical", ["practicle", "practicle"]),
        ("presence", ["presance", "presance"]),
        ("probably", ["probally", "probally"]),
        ("professional", ["profesional", "profesional"]),
        ("professor", ["professer", "professer"]),
        ("promise", ["promiss", "promiss"]),
        ("pronunciation", ["pronounciation", "pronounciation"]),
        ("purpose", ["purpous", "purpous"]),
        ("quantity", ["quantaty", "quantaty"]),
        ("questionnaire", ["questionaire", "questionaire"]),
        ("quiet", ["quite", "quite"]),
        ("quite", ["quiet", "quiet"]),
        ("really", ["realy", "realy"]),
        ("reference", ["referance", "referance"]),
        ("religion", ["religon", "religon"]),
        ("remember", ["rember", "rember"]),
        ("representative", ["representitive", "representitive"]),
        ("restaurant", ["resturant", "resturant"]),
        ("rhythm", ["rythm", "rythm"]),
        ("ridiculous", ["rediculous", "rediculous"]),
        ("safety", ["safty", "safty"]),
        ("schedule", ["scedule", "scedule"]),
        ("science", ["sience", "sience"]),
        ("secretary", ["secratary", "secratary"]),
        ("serious", ["sirius", "sirius"]),
        ("should", ["shold", "shold"]),
        ("sincerely", ["sincerly", "sincerly"]),
        ("soldier", ["solider", "solider"]),
        ("something", ["somthing", "somthing"]),
        ("sometimes", ["sometime", "sometime"]),
        ("sophomore", ["sophmore", "sophmore"]),
        ("succeed", ["suceed", "suceed"]),
        ("surprise", ["suprise", "suprise"]),
        ("temperature", ["temperture", "temperture"]),
        ("tendency", ["tendancy", "tendancy"]),
        ("therefore", ["therefor", "therefor"]),
        ("thorough", ["thorogh", "thorogh"]),
        ("thought", ["thot", "thot"]),
        ("through", ["thru", "thru"]),
        ("tired", ["tierd", "tierd"]),
        ("together", ["togather", "togather"]),
        ("tomorrow", ["tommorow", "tommorow"]),
        ("tongue", ["tounge", "tounge"]),
        ("truly", ["truely", "truely"]),
        ("unfortunately", ["unfortunatly", "unfortunatly"]),
        ("until", ["untill", "untill"]),
        ("usually", ["usualy", "usualy"]),
        ("vacuum", ["vaccum", "vaccum"]),
        ("valuable", ["valuble", "valuble"]),
        ("vegetable", ["vegtable", "vegtable"]),
        ("vehicle", ["vehical", "vehical"]),
        ("village", ["villige", "villige"]),
        ("weird", ["wierd", "wierd"]),
        ("whether", ["wether", "wether"]),
        ("which", ["wich", "wich"]),
        ("writing", ["writting", "writting"]),
        ("written", ["writen", "writen"]),
        ("wrong", ["rong", "rong"]),
        ("yield", ["yeild", "yeild"]),
    ]
    .into_iter()
    .collect()
});

/// Known misspellings for `word`, duplicates removed, or `None` if the word
/// is not in the table.
pub fn known_misspellings(word: &str) -> Option<Vec<String>> {
    let entries = KNOWN_MISSPELLINGS.get(word)?;
    let mut out: Vec<String> = Vec::with_capacity(entries.len());
    for candidate in entries {
        if !out.iter().any(|c| c == candidate) {
            out.push((*candidate).to_string());
        }
    }
    Some(out)
}

/// Number of words in the curated table.
pub fn table_len() -> usize {
    KNOWN_MISSPELLINGS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_necessary() {
        assert_eq!(
            known_misspellings("necessary").unwrap(),
            vec!["neccessary", "necesary"]
        );
    }

    #[test]
    fn test_repeated_entries_collapse() {
        assert_eq!(known_misspellings("calendar").unwrap(), vec!["calender", "calandar"]);
        assert_eq!(known_misspellings("rhythm").unwrap(), vec!["rythm"]);
    }

    #[test]
    fn test_unknown_word() {
        assert!(known_misspellings("garden").is_none());
    }

    #[test]
    fn test_table_never_maps_word_to_itself() {
        for (word, entries) in KNOWN_MISSPELLINGS.iter() {
            assert!(!entries.contains(word), "{} maps to itself", word);
        }
    }
}
