//! English reference tables.

use crate::alphabet::ALPHABET_SIZE;

/// Letter frequencies in percent, A through Z.
pub(super) const UNIGRAM_PERCENT: [f64; ALPHABET_SIZE] = [
    8.17, 1.29, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, // A-M
    6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07, // N-Z
];

/// Bigram frequencies in percent. Pairs not listed are assigned a floor.
pub(super) const BIGRAM_PERCENT: &[(&str, f64)] = &[
    ("TH", 3.56), ("HE", 3.07), ("IN", 2.43), ("ER", 2.05), ("AN", 1.99), ("RE", 1.85),
    ("ON", 1.76), ("AT", 1.49), ("EN", 1.45), ("ND", 1.35), ("ES", 1.34), ("TI", 1.34),
    ("OR", 1.28), ("TE", 1.20), ("ED", 1.17), ("OF", 1.17), ("IS", 1.13), ("IT", 1.12),
    ("AL", 1.09), ("AR", 1.07), ("ST", 1.05), ("NT", 1.04), ("TO", 1.04), ("NG", 0.95),
    ("HA", 0.93), ("SE", 0.93), ("AS", 0.87), ("OU", 0.87), ("IO", 0.83), ("LE", 0.83),
    ("VE", 0.83), ("CO", 0.79), ("ME", 0.79), ("DE", 0.76), ("HI", 0.76), ("RI", 0.73),
    ("RO", 0.73), ("IC", 0.70), ("EA", 0.69), ("NE", 0.69), ("RA", 0.69), ("CE", 0.65),
    ("LI", 0.62), ("CH", 0.60), ("BE", 0.58), ("LL", 0.58), ("MA", 0.57), ("OM", 0.55),
    ("SI", 0.55), ("CA", 0.54), ("UR", 0.54), ("EL", 0.53), ("LA", 0.53), ("TA", 0.53),
    ("NS", 0.51), ("DI", 0.50), ("FO", 0.50), ("HO", 0.49), ("EC", 0.48), ("PE", 0.48),
    ("NO", 0.47), ("PR", 0.47), ("CT", 0.46), ("AC", 0.45), ("US", 0.45), ("OT", 0.44),
    ("IL", 0.43), ("LY", 0.43), ("TR", 0.43), ("ET", 0.42), ("NC", 0.42), ("UT", 0.42),
    ("SS", 0.41), ("RS", 0.40), ("SO", 0.40), ("LO", 0.39), ("UN", 0.39), ("EE", 0.38),
    ("GE", 0.38), ("IE", 0.38), ("WA", 0.38), ("WH", 0.38), ("AD", 0.37), ("EM", 0.37),
    ("OL", 0.37), ("WI", 0.37), ("PO", 0.36), ("RT", 0.36), ("WE", 0.36), ("NA", 0.35),
    ("UL", 0.35), ("MO", 0.34), ("NI", 0.34), ("TS", 0.34), ("OW", 0.33), ("AI", 0.32),
    ("IM", 0.32), ("MI", 0.32), ("PA", 0.32), ("SH", 0.32), ("IR", 0.31), ("SU", 0.31),
    ("ID", 0.30), ("OS", 0.30), ("AM", 0.29), ("CI", 0.29), ("FI", 0.29), ("IA", 0.29),
    ("IV", 0.29), ("VI", 0.27), ("EV", 0.26), ("IG", 0.26), ("PL", 0.26), ("TU", 0.26),
    ("LD", 0.25), ("MP", 0.25), ("RY", 0.25), ("AB", 0.24), ("BL", 0.24), ("FE", 0.24),
    ("GH", 0.23), ("OP", 0.23), ("TY", 0.23), ("AY", 0.22), ("SA", 0.22), ("WO", 0.22),
    ("EX", 0.21), ("FR", 0.21), ("KE", 0.21), ("OO", 0.21), ("AG", 0.20), ("AP", 0.20),
    ("AV", 0.20), ("IF", 0.20), ("BO", 0.19), ("GR", 0.19), ("OD", 0.19), ("RD", 0.19),
    ("SP", 0.19), ("BU", 0.18), ("BY", 0.18), ("DO", 0.18), ("EI", 0.18), ("OV", 0.18),
    ("RM", 0.18), ("UC", 0.18), ("EP", 0.17), ("FA", 0.17), ("OC", 0.17), ("TT", 0.17),
    ("CU", 0.16), ("EF", 0.16), ("RN", 0.16), ("SC", 0.16), ("BA", 0.15), ("CL", 0.15),
    ("CR", 0.15), ("DA", 0.15), ("DU", 0.15), ("FF", 0.15), ("GA", 0.15), ("GI", 0.15),
    ("QU", 0.15), ("UE", 0.15), ("YO", 0.15), ("EY", 0.14), ("GO", 0.14), ("HT", 0.14),
    ("LS", 0.14), ("LU", 0.14), ("PP", 0.14), ("RU", 0.14), ("UA", 0.14), ("UM", 0.14),
    ("UP", 0.14), ("VA", 0.14), ("DS", 0.13), ("LT", 0.13), ("PI", 0.13), ("UG", 0.13),
    ("AU", 0.12), ("CK", 0.12), ("EG", 0.12), ("EW", 0.12), ("RC", 0.12), ("RR", 0.12),
    ("AK", 0.11), ("BI", 0.11), ("BR", 0.11), ("MU", 0.11), ("PT", 0.11), ("PU", 0.11),
    ("FU", 0.10), ("IB", 0.10), ("KI", 0.10), ("MM", 0.10), ("NY", 0.10), ("OB", 0.10),
    ("RG", 0.10), ("RK", 0.10), ("TL", 0.10), ("UI", 0.10), ("YS", 0.10), ("DR", 0.09),
    ("GU", 0.09), ("IP", 0.09), ("MB", 0.09), ("MS", 0.09), ("OG", 0.09), ("OI", 0.09),
    ("PH", 0.09), ("RL", 0.09), ("UB", 0.09), ("UD", 0.09), ("YE", 0.09), ("AF", 0.08),
    ("CC", 0.08), ("FT", 0.08), ("HR", 0.08), ("HU", 0.08), ("NU", 0.08), ("TW", 0.08),
    ("WN", 0.08), ("AW", 0.07), ("EO", 0.07), ("FL", 0.07), ("GL", 0.07), ("GN", 0.07),
    ("IZ", 0.07), ("MY", 0.07), ("NF", 0.07), ("NL", 0.07), ("NN", 0.07), ("OK", 0.07),
    ("RV", 0.07), ("SM", 0.07), ("VO", 0.07), ("XP", 0.07), ("EQ", 0.06), ("JU", 0.06),
    ("OA", 0.06), ("PS", 0.06), ("SL", 0.06), ("SY", 0.06), ("BS", 0.05), ("CY", 0.05),
    ("DD", 0.05), ("DY", 0.05), ("GS", 0.05), ("HY", 0.05), ("IK", 0.05), ("JE", 0.05),
    ("JO", 0.05), ("KN", 0.05), ("KS", 0.05), ("LF", 0.05), ("NK", 0.05), ("NV", 0.05),
    ("RP", 0.05), ("XT", 0.05), ("ZE", 0.05), ("DG", 0.04), ("DL", 0.04), ("EB", 0.04),
    ("EH", 0.04), ("EU", 0.04), ("GY", 0.04), ("HN", 0.04), ("JA", 0.04), ("LV", 0.04),
    ("NM", 0.04), ("OE", 0.04), ("OY", 0.04), ("RB", 0.04), ("RF", 0.04), ("SK", 0.04),
    ("TC", 0.04), ("TM", 0.04), ("WR", 0.04), ("WS", 0.04), ("XA", 0.04), ("XC", 0.04),
    ("XI", 0.04), ("YI", 0.04), ("AE", 0.03), ("AH", 0.03), ("AJ", 0.03), ("AX", 0.03),
    ("AZ", 0.03), ("BB", 0.03), ("BT", 0.03), ("CS", 0.03), ("DM", 0.03), ("DN", 0.03),
    ("DV", 0.03), ("DW", 0.03), ("EK", 0.03), ("FY", 0.03), ("GG", 0.03), ("GM", 0.03),
    ("GT", 0.03), ("HL", 0.03), ("HM", 0.03), ("HS", 0.03), ("II", 0.03), ("IQ", 0.03),
    ("IU", 0.03), ("IX", 0.03), ("KA", 0.03), ("KL", 0.03), ("LB", 0.03), ("LC", 0.03),
    ("LK", 0.03), ("LM", 0.03), ("LP", 0.03), ("LR", 0.03), ("LW", 0.03), ("MN", 0.03),
    ("NH", 0.03), ("NJ", 0.03), ("NR", 0.03), ("OH", 0.03), ("OJ", 0.03), ("OX", 0.03),
    ("PM", 0.03), ("PY", 0.03), ("RH", 0.03), ("RW", 0.03), ("SB", 0.03), ("SF", 0.03),
    ("SN", 0.03), ("SQ", 0.03), ("SW", 0.03), ("TN", 0.03), ("UF", 0.03), ("UO", 0.03),
    ("WL", 0.03), ("WT", 0.03), ("XE", 0.03), ("YA", 0.03), ("YC", 0.03), ("YD", 0.03),
    ("YL", 0.03), ("YM", 0.03), ("YN", 0.03), ("YP", 0.03), ("YR", 0.03), ("YT", 0.03),
    ("ZA", 0.03), ("ZI", 0.03), ("ZO", 0.03),
];
