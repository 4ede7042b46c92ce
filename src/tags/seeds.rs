//! Built-in keyword taxonomy
//!
//! The categories and (pattern, label) pairs used to tag incident
//! narratives. Patterns are authored against lowercased text; several
//! patterns in a category may normalize to the same label (verb
//! inflections mostly) and accumulate under it.

/// One category of the seed taxonomy: a name and its (pattern, label) rules
pub struct SeedCategory {
    pub name: &'static str,
    pub rules: &'static [(&'static str, &'static str)],
}

/// The built-in keyword taxonomy for misconduct narratives
pub const SEED_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Police Actions",
        rules: &[
            (r"shoot\w*|shot", "shoot"),
            (r"firearm\w*", "firearm"),
            (r"gun\w*", "gun"),
            (r"taser\w*", "taser"),
            (r"choke\w*", "choke"),
            (r"strangle\w*", "strangle"),
            (r"kneel\w*", "kneel"),
            (r"restrain\w*", "restrain"),
            (r"abuse\w*", "abuse"),
            (r"arrest\w*", "arrest"),
            (r"beat\w*", "beat"),
            (r"strike\w*", "strike"),
            (r"punch\w*", "punch"),
            (r"assault\w*", "assault"),
            (r"harass\w*", "harass"),
            (r"kick\w*", "kick"),
            (r"spray\w*", "spray"),
            (r"mace\w*", "mace"),
            (r"handcuff\w*|cuff\w*", "handcuff"),
            (r"detain\w*", "detain"),
            (r"apprehend\w*", "apprehend"),
            (r"drag\w*", "drag"),
            (r"slam\w*", "slam"),
            (r"search\w*", "search"),
            (r"raid\w*", "raid"),
            (r"smash\w*", "smash"),
            (r"tackle\w*", "tackle"),
            (r"push\w*", "push"),
            (r"grab\w*", "grab"),
            (r"rape\w*", "rape"),
            (r"sexual assault\w*", "sexual assault"),
            (r"hit\w*", "hit"),
            (r"bash\w*", "bash"),
            (r"throw\w*", "throw"),
            (r"shove\w*", "shove"),
            (r"wrestle\w*", "wrestle"),
            (r"force\w*", "force"),
            (r"struck\w*", "struck"),
            (r"slap\w*", "slap"),
            (r"whip\w*", "whip"),
            (r"deploy\w*", "deploy"),
            (r"tear gas", "tear gas"),
            (r"pepper spray", "pepper spray"),
            (r"club\w*", "club"),
            (r"baton\w*", "baton"),
            (r"chase\w*", "chase"),
        ],
    },
    SeedCategory {
        name: "Outcomes",
        rules: &[
            (r"kill\w*", "kill"),
            (r"dead|deceased|die\w*", "dead"),
            (r"fatal\w*", "fatal"),
            (r"deaths?", "death"),
            (r"injur\w*", "injury"),
            (r"wound\w*", "wound"),
            (r"bleed\w*", "bleed"),
            (r"bruise\w*", "bruise"),
            (r"hospitals?", "hospital"),
            (r"hospitalize\w*", "hospitalize"),
            (r"emergency room|er", "emergency room"),
            (r"icu", "ICU"),
            (r"coma", "coma"),
            (r"paralyze\w*", "paralyze"),
            (r"disable\w*", "disable"),
            (r"lifeless", "lifeless"),
            (r"autopsy", "autopsy"),
            (r"critical", "critical"),
            (r"fracture\w*", "fracture"),
            (r"disfigure\w*", "disfigure"),
            (r"unconscious\w*", "unconscious"),
            (r"respiratory arrest", "respiratory arrest"),
            (r"cardiac arrest", "cardiac arrest"),
            (r"suffocate\w*", "suffocate"),
        ],
    },
    SeedCategory {
        name: "Officer Involved",
        rules: &[
            (r"officer\w*", "officer"),
            (r"cop\w*", "cop"),
            (r"police", "police"),
            (r"detective\w*", "detective"),
            (r"sheriff\w*", "sheriff"),
            (r"deputy\w*", "deputy"),
            (r"trooper\w*", "trooper"),
            (r"constable\w*", "constable"),
            (r"marshal\w*", "marshal"),
            (r"agent\w*", "agent"),
        ],
    },
    SeedCategory {
        name: "Location",
        rules: &[
            (r"traffic\w*", "traffic"),
            (r"home\w*", "home"),
            (r"house\w*", "house"),
            (r"apartment\w*", "apartment"),
            (r"residence\w*", "residence"),
            (r"street\w*", "street"),
            (r"intersection\w*", "intersection"),
            (r"road\w*", "road"),
            (r"highway\w*", "highway"),
            (r"parking lot\w*", "parking lot"),
            (r"protest\w*", "protest"),
            (r"march\w*", "march"),
            (r"rall\w*", "rally"),
            (r"public", "public"),
            (r"store\w*", "store"),
            (r"gas station\w*", "gas station"),
            (r"scene\w*", "scene"),
            (r"school\w*", "school"),
            (r"universit\w*", "university"),
            (r"neighborhood\w*", "neighborhood"),
            (r"community\w*", "community"),
            (r"church\w*", "church"),
            (r"park\w*", "park"),
            (r"block", "block"),
            (r"alley\w*", "alley"),
            (r"sidewalk\w*", "sidewalk"),
            (r"detention center", "detention center"),
            (r"jail", "jail"),
            (r"prison", "prison"),
            (r"court\w*", "court"),
            (r"station\w*", "station"),
            (r"alleyway", "alleyway"),
            (r"side street", "side street"),
            (r"parking garage", "parking garage"),
            (r"bus stop", "bus stop"),
            (r"mall", "mall"),
            (r"suburb\w*", "suburb"),
        ],
    },
    SeedCategory {
        name: "Other",
        rules: &[
            (r"racism", "racism"),
            (r"racial", "racial"),
            (r"racist", "racist"),
            (r"discrimination", "discrimination"),
            (r"bias", "bias"),
            (r"unarmed", "unarmed"),
            (r"injustice", "injustice"),
            (r"body cam\w*", "body camera"),
            (r"footage", "footage"),
            (r"lawsuit\w*", "lawsuit"),
            (r"complaint\w*", "complaint"),
            (r"civil rights", "civil rights"),
            (r"rights violation", "rights violation"),
            (r"investigation\w*", "investigation"),
            (r"indictment\w*", "indictment"),
            (r"charges", "charges"),
            (r"trial\w*", "trial"),
            (r"convicted", "convicted"),
            (r"accountability", "accountability"),
            (r"reform\w*", "reform"),
            (r"policy", "policy"),
            (r"cover up", "cover up"),
            (r"prosecut\w*", "prosecute"),
            (r"settlement\w*", "settlement"),
            (r"profiling", "profiling"),
            (r"surveillance", "surveillance"),
            (r"whistleblower\w*", "whistleblower"),
            (r"retaliation", "retaliation"),
            (r"misconduct", "misconduct"),
            (r"immunity", "immunity"),
            (r"violence", "violence"),
        ],
    },
    SeedCategory {
        name: "Emotional Impact",
        rules: &[
            (r"fear\w*", "fear"),
            (r"trauma", "trauma"),
            (r"shaken", "shaken"),
            (r"terrified", "terrified"),
            (r"panic\w*", "panic"),
            (r"cry\w*", "cry"),
            (r"scream\w*", "scream"),
            (r"mental health", "mental health"),
            (r"shock", "shock"),
            (r"breakdown", "breakdown"),
            (r"nightmare", "nightmare"),
            (r"helpless", "helpless"),
            (r"powerless", "powerless"),
            (r"grief", "grief"),
            (r"mourning", "mourning"),
            (r"anxiety", "anxiety"),
            (r"depression", "depression"),
            (r"stress", "stress"),
            (r"ptsd", "PTSD"),
            (r"anguish", "anguish"),
            (r"distress", "distress"),
            (r"fearful", "fearful"),
            (r"dread", "dread"),
            (r"hopeless", "hopeless"),
            (r"vulnerable", "vulnerable"),
        ],
    },
    SeedCategory {
        name: "Immigration",
        rules: &[
            (r"immigration", "immigration"),
            (r"detention", "detention"),
            (r"deport\w*", "deportation"),
            (r"migrant\w*", "migrant"),
            (r"refugee\w*", "refugee"),
            (r"asylum", "asylum"),
            (r"border patrol", "border patrol"),
            (r"customs and border protection|cbp", "customs and border protection"),
            (r"detainee\w*", "detainee"),
            (r"holding center\w*", "holding center"),
            (r"immigrant detention center", "detention center"),
            (r"immigration enforcement", "immigration enforcement"),
        ],
    },
];
