//! The vocabulary compiled into the binary.

/// Category name followed by its (Polish, English) pairs, in menu order.
pub(crate) const BUILTIN_VOCABULARY: &[(&str, &[(&str, &str)])] = &[
    (
        "greetings",
        &[
            ("dzień dobry", "good day"),
            ("dobry wieczór", "good evening"),
            ("cześć", "hello"),
            ("do widzenia", "goodbye"),
            ("dziękuję", "thank you"),
            ("proszę", "please"),
            ("tak", "yes"),
            ("nie", "no"),
        ],
    ),
    (
        "family",
        &[
            ("mama", "mom"),
            ("tata", "dad"),
            ("syn", "son"),
            ("córka", "daughter"),
            ("brat", "brother"),
            ("siostra", "sister"),
            ("dziadek", "grandfather"),
            ("babcia", "grandmother"),
        ],
    ),
    (
        "numbers",
        &[
            ("jeden", "one"),
            ("dwa", "two"),
            ("trzy", "three"),
            ("cztery", "four"),
            ("pięć", "five"),
            ("sześć", "six"),
            ("siedem", "seven"),
            ("osiem", "eight"),
            ("dziewięć", "nine"),
            ("dziesięć", "ten"),
        ],
    ),
    (
        "colors",
        &[
            ("czerwony", "red"),
            ("niebieski", "blue"),
            ("zielony", "green"),
            ("żółty", "yellow"),
            ("czarny", "black"),
            ("biały", "white"),
            ("różowy", "pink"),
            ("fioletowy", "purple"),
        ],
    ),
    (
        "food",
        &[
            ("chleb", "bread"),
            ("mleko", "milk"),
            ("woda", "water"),
            ("mięso", "meat"),
            ("ryba", "fish"),
            ("jabłko", "apple"),
            ("banan", "banana"),
            ("ser", "cheese"),
        ],
    ),
    (
        "phrases",
        &[
            ("jak się masz?", "how are you?"),
            ("miło mi cię poznać", "nice to meet you"),
            ("nie rozumiem", "I don't understand"),
            ("mówisz po angielsku?", "do you speak English?"),
            ("ile to kosztuje?", "how much does it cost?"),
            ("gdzie jest toaleta?", "where is the bathroom?"),
        ],
    ),
];
