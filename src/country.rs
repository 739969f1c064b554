//! Country names, ISO 3166-1 alpha-2 codes and output file naming.

/// Built-in country table, name → ISO alpha-2 code.
///
/// Names are lower case with single spaces. Common alternative names map to
/// the same code.
pub static COUNTRIES: &[(&str, &str)] = &[
    ("afghanistan", "af"), ("albania", "al"), ("algeria", "dz"), ("andorra", "ad"),
    ("angola", "ao"), ("argentina", "ar"), ("armenia", "am"), ("australia", "au"),
    ("austria", "at"), ("azerbaijan", "az"), ("bahamas", "bs"), ("bahrain", "bh"),
    ("bangladesh", "bd"), ("barbados", "bb"), ("belarus", "by"), ("belgium", "be"),
    ("belize", "bz"), ("benin", "bj"), ("bhutan", "bt"), ("bolivia", "bo"),
    ("bosnia", "ba"), ("botswana", "bw"), ("brazil", "br"), ("brunei", "bn"),
    ("bulgaria", "bg"), ("burkina", "bf"), ("burundi", "bi"), ("cambodia", "kh"),
    ("cameroon", "cm"), ("canada", "ca"), ("chad", "td"), ("chile", "cl"),
    ("china", "cn"), ("colombia", "co"), ("comoros", "km"), ("congo", "cg"),
    ("croatia", "hr"), ("cuba", "cu"), ("cyprus", "cy"), ("czechia", "cz"),
    ("denmark", "dk"), ("djibouti", "dj"), ("dominica", "dm"), ("ecuador", "ec"),
    ("egypt", "eg"), ("estonia", "ee"), ("ethiopia", "et"), ("fiji", "fj"),
    ("finland", "fi"), ("france", "fr"), ("gabon", "ga"), ("gambia", "gm"),
    ("georgia", "ge"), ("germany", "de"), ("ghana", "gh"), ("greece", "gr"),
    ("grenada", "gd"), ("guatemala", "gt"), ("guinea", "gn"), ("guyana", "gy"),
    ("haiti", "ht"), ("honduras", "hn"), ("hungary", "hu"), ("iceland", "is"),
    ("india", "in"), ("indonesia", "id"), ("iran", "ir"), ("iraq", "iq"),
    ("ireland", "ie"), ("israel", "il"), ("italy", "it"), ("jamaica", "jm"),
    ("japan", "jp"), ("jordan", "jo"), ("kazakhstan", "kz"), ("kenya", "ke"),
    ("kiribati", "ki"), ("kosovo", "xk"), ("kuwait", "kw"), ("kyrgyzstan", "kg"),
    ("laos", "la"), ("latvia", "lv"), ("lebanon", "lb"), ("lesotho", "ls"),
    ("liberia", "lr"), ("libya", "ly"), ("lithuania", "lt"), ("luxembourg", "lu"),
    ("madagascar", "mg"), ("malawi", "mw"), ("malaysia", "my"), ("maldives", "mv"),
    ("mali", "ml"), ("malta", "mt"), ("mauritania", "mr"), ("mauritius", "mu"),
    ("mexico", "mx"), ("micronesia", "fm"), ("moldova", "md"), ("monaco", "mc"),
    ("mongolia", "mn"), ("montenegro", "me"), ("morocco", "ma"), ("mozambique", "mz"),
    ("myanmar", "mm"), ("namibia", "na"), ("nauru", "nr"), ("nepal", "np"),
    ("netherlands", "nl"), ("nicaragua", "ni"), ("niger", "ne"), ("nigeria", "ng"),
    ("north macedonia", "mk"), ("norway", "no"), ("oman", "om"), ("pakistan", "pk"),
    ("palau", "pw"), ("panama", "pa"), ("paraguay", "py"), ("peru", "pe"),
    ("philippines", "ph"), ("poland", "pl"), ("portugal", "pt"), ("qatar", "qa"),
    ("romania", "ro"), ("russia", "ru"), ("rwanda", "rw"), ("samoa", "ws"),
    ("senegal", "sn"), ("serbia", "rs"), ("singapore", "sg"), ("slovakia", "sk"),
    ("slovenia", "si"), ("somalia", "so"), ("spain", "es"), ("sudan", "sd"),
    ("suriname", "sr"), ("sweden", "se"), ("switzerland", "ch"), ("syria", "sy"),
    ("taiwan", "tw"), ("tajikistan", "tj"), ("tanzania", "tz"), ("thailand", "th"),
    ("togo", "tg"), ("tonga", "to"), ("tunisia", "tn"), ("turkey", "tr"),
    ("turkmenistan", "tm"), ("tuvalu", "tv"), ("uganda", "ug"), ("ukraine", "ua"),
    ("uruguay", "uy"), ("uzbekistan", "uz"), ("vanuatu", "vu"), ("vatican", "va"),
    ("venezuela", "ve"), ("vietnam", "vn"), ("yemen", "ye"), ("zambia", "zm"),
    ("zimbabwe", "zw"),
    // Alternatives
    ("usa", "us"), ("united states", "us"), ("uk", "gb"), ("united kingdom", "gb"),
    ("britain", "gb"), ("south korea", "kr"), ("north korea", "kp"),
    ("czech republic", "cz"), ("dominican republic", "do"),
    ("central african republic", "cf"), ("democratic republic of congo", "cd"),
    ("east timor", "tl"), ("equatorial guinea", "gq"), ("ivory coast", "ci"),
    ("marshall islands", "mh"), ("papua new guinea", "pg"), ("saint lucia", "lc"),
    ("saudi arabia", "sa"), ("sierra leone", "sl"), ("solomon islands", "sb"),
    ("south africa", "za"), ("south sudan", "ss"), ("sri lanka", "lk"),
    ("trinidad and tobago", "tt"), ("united arab emirates", "ae"),
];

/// Lower-case a name and collapse whitespace runs to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// ISO alpha-2 code for a country name, if known.
pub fn iso_code(name: &str) -> Option<&'static str> {
    let key = normalize_name(name);
    COUNTRIES
        .iter()
        .find(|(country, _)| *country == key)
        .map(|(_, code)| *code)
}

/// Output file stem for a country name.
///
/// Lower case, whitespace runs become a single `-`, anything else that is
/// not alphanumeric is dropped: `"Côte d'Ivoire"` → `"côte-divoire"`.
pub fn file_stem(country: &str) -> String {
    country
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
