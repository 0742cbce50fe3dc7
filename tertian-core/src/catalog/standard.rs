//! Built-in chord formulas, grouped by chord size.
//!
//! Each row is (name, intervals, root offset, long name). Intervals are the
//! matching formula of one stacked voicing; the root offset is the pool-step
//! distance from that voicing's lowest note to the chord root (0 when the
//! lowest note is the root). Rows are matched in the order listed.
//!
//! Several rows share a formula on purpose: a rootless or incomplete voicing
//! of one chord is physically the same set of intervals as a complete voicing
//! of another.

pub(super) type Row = (&'static str, &'static [u8], i8, &'static str);

pub(super) const TWO_NOTE: &[Row] = &[
    // No 3rd
    ("5", &[7], 0, "Indeterminate triad (power chord)"),
    ("b5 no 3rd", &[6], 0, "Flat five no third"),
    // No 5th
    ("maj no 5th", &[4], 0, "Major no fifth"),
    ("min no 5th", &[3], 0, "Minor no fifth"),
    ("sus4 no 5th", &[5], 0, "Suspended fourth no fifth"),
    ("sus2 no 5th", &[2], 0, "Suspended second no fifth"),
    // No root: 3rd and 5th
    ("maj no root", &[3], -4, "Major no root"),
    ("min no root", &[4], -3, "Minor no root"),
    // Root and 7th only
    ("maj7 no(3rd, 5th)", &[11], 0, "Major seventh no third no fifth"),
    ("7 no(3rd, 5th)", &[10], 0, "Dominant seventh no third no fifth"),
];

pub(super) const THREE_NOTE: &[Row] = &[
    // Triads
    ("maj", &[4, 3], 0, "Major triad"),
    ("min", &[3, 4], 0, "Minor triad"),
    ("aug", &[4, 4], 0, "Augmented triad"),
    ("dim", &[3, 3], 0, "Diminished triad"),
    // Suspended
    ("sus4", &[5, 2], 0, "Suspended fourth trichord"),
    ("sus2", &[2, 5], 0, "Suspended second trichord"),
    // Sevenths without the 5th
    ("maj7 no 5th", &[4, 7], 0, "Major seventh no fifth"),
    ("min7 no 5th", &[3, 7], 0, "Minor seventh no fifth"),
    ("7 no 5th", &[4, 6], 0, "Dominant seventh no fifth"),
    ("dim7 no 5th", &[3, 6], 0, "Diminished seventh no fifth"),
    ("minmaj7 no 5th", &[3, 8], 0, "Minor-major seventh no fifth"),
    // Sixths without the 5th
    ("maj6 no 5th", &[4, 5], 0, "Major sixth no fifth"),
    ("min6 no 5th", &[3, 6], 0, "Minor sixth no fifth"),
    // Added tones without the 5th
    ("maj add2 no 5th", &[4, 10], 0, "Major added-second no fifth"),
    ("maj add4 no 5th", &[4, 1], 0, "Major added-fourth no fifth"),
    // Sevenths without the root: lowest note is the 3rd
    ("maj7 no root", &[3, 4], -4, "Major seventh no root"),
    ("min7 no root", &[4, 3], -3, "Minor seventh no root"),
    ("7 no root", &[3, 3], -4, "Dominant seventh no root"),
    ("min7b5 no root", &[3, 4], -3, "Half-diminished seventh no root"),
    ("dim7 no root", &[3, 3], -3, "Diminished seventh no root"),
    ("minmaj7 no root", &[4, 4], -3, "Minor-major seventh no root"),
    ("maj7#5 no root", &[4, 3], -4, "Augmented-major seventh no root"),
    ("7b5 no root", &[2, 4], -4, "Dominant seventh flat fifth no root"),
    ("7#5 no root", &[4, 2], -4, "Dominant seventh sharp fifth no root"),
    ("maj7b5 no root", &[2, 5], -4, "Major seventh flat fifth no root"),
    ("min7#5 no root", &[5, 2], -3, "Minor seventh sharp fifth no root"),
];

pub(super) const FOUR_NOTE: &[Row] = &[
    // Sevenths
    ("maj7", &[4, 3, 4], 0, "Major seventh"),
    ("min7", &[3, 4, 3], 0, "Minor seventh"),
    ("7", &[4, 3, 3], 0, "Dominant seventh"),
    ("min7b5", &[3, 3, 4], 0, "Half-diminished seventh"),
    ("dim7", &[3, 3, 3], 0, "Diminished seventh"),
    ("minmaj7", &[3, 4, 4], 0, "Minor-major seventh"),
    ("maj7#5", &[4, 4, 3], 0, "Augmented-major seventh"),
    ("7b5", &[4, 2, 4], 0, "Dominant seventh flat fifth"),
    ("7#5", &[4, 4, 2], 0, "Dominant seventh sharp fifth"),
    ("maj7b5", &[4, 2, 5], 0, "Major seventh flat fifth"),
    ("min7#5", &[3, 5, 2], 0, "Minor seventh sharp fifth"),
    ("7#9b5 no R", &[2, 4, 5], -4, "Dominant seventh sharp ninth flat fifth no root"),
    ("7#9b9 no 3, 5", &[1, 2, 7], 0, "Dominant seventh sharp ninth flat ninth no: third, fifth"),
    ("maj7#9 no 5", &[3, 1, 7], 0, "Major seventh sharp ninth no fifth"),
    ("7#11 no 3", &[6, 1, 3], 0, "Dominant seventh sharp eleventh no third"),
    // Sixths
    ("maj6", &[4, 3, 2], 0, "Major sixth"),
    ("min6", &[3, 4, 2], 0, "Minor sixth"),
    // Added tones
    ("maj add2", &[4, 3, 7], 0, "Major added-second"),
    ("maj add4", &[4, 3, 10], 0, "Major added-fourth"),
    // Ninths
    ("maj9 no 3", &[2, 5, 4], 0, "Major ninth no third"),
    ("maj9 no 5th", &[2, 2, 7], 0, "Major ninth no fifth"),
    ("min9 no 5th", &[3, 7, 4], 0, "Minor ninth no fifth"),
    ("9 no 5th", &[4, 6, 4], 0, "Dominant ninth no fifth"),
    ("minmaj9 no 5th", &[2, 1, 8], 0, "Minor-major ninth no fifth"),
    ("6/9 no 5th", &[4, 5, 5], 0, "Six nine no fifth"),
    ("maj9#11 no 3, 5", &[2, 4, 5], 0, "Major ninth sharp eleventh no: third, fifth"),
    ("maj9 no root", &[3, 4, 3], -4, "Major ninth no root"),
    ("9 sus4 no root", &[3, 4, 3], -7, "Dominant ninth suspended fourth no root"),
    ("9 no root", &[3, 3, 4], -4, "Dominant ninth no root"),
    ("min9#11 no R, 7", &[3, 1, 7], -3, "Minor ninth sharp eleventh no: root, seventh"),
    // Elevenths
    ("maj11 no 3, 5", &[2, 3, 6], 0, "Major eleventh no: third, fifth"),
    ("min11 no 5, 7", &[2, 1, 2], 0, "Minor eleventh no: fifth, seventh"),
    ("11b9 no 5, 7", &[1, 3, 1], 0, "Dominant eleventh flat ninth no: fifth, seventh"),
    ("11 no R, 9", &[1, 2, 3], -4, "Dominant eleventh no: root, ninth"),
    ("min11 no R, 5", &[2, 5, 4], -3, "Minor eleventh no: root, fifth"),
    ("min11 no R, 7", &[2, 2, 7], -3, "Minor eleventh no: root, seventh"),
    ("11#5 no R, 9", &[1, 3, 2], -4, "Dominant eleventh sharp fifth no: root, ninth"),
    ("minmaj11 no 5, 9", &[3, 2, 6], 0, "Minor-major eleventh no: fifth, ninth"),
    // Thirteenths
    ("min13 no 5, 9, 11", &[3, 6, 1], 0, "Minor thirteenth no: fifth, ninth, eleventh"),
    ("13 no 5, 9, 11", &[4, 5, 1], 0, "Dominant thirteenth no: fifth, ninth, eleventh"),
    ("13 no 3, 5, 11", &[2, 7, 1], 0, "Dominant thirteenth no: third, fifth, eleventh"),
    ("13 no 3, 5, 9", &[5, 4, 1], 0, "Dominant thirteenth no: third, fifth, ninth"),
    ("maj13 no 3, 5, 11", &[2, 7, 2], 0, "Major thirteenth no: third, fifth, eleventh"),
    ("13b9 no 3, 5, 11", &[1, 8, 1], 0, "Dominant thirteenth flat ninth no: third, fifth, eleventh"),
    ("13 no 3, 9, 11", &[7, 2, 1], 0, "Dominant thirteenth no: third, ninth, eleventh"),
    // Lowest note is the 13th: 13, b7, b9, #9
    ("13#9b9 no R, 3, 5, 11", &[1, 3, 2], -9, "Dominant thirteenth sharp ninth flat ninth no: root, third, fifth, eleventh"),
];

pub(super) const FIVE_NOTE: &[Row] = &[
    // Ninths
    ("min9", &[3, 4, 3, 4], 0, "Minor ninth"),
    ("9", &[4, 3, 3, 4], 0, "Dominant ninth"),
    ("maj9", &[4, 3, 4, 3], 0, "Major ninth"),
    ("6/9", &[4, 3, 2, 5], 0, "Six nine"),
    ("9 sus4", &[5, 2, 3, 4], 0, "Dominant ninth suspended fourth"),
];
