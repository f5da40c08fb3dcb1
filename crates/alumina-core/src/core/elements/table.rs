use crate::core::models::element::Element;
use phf::{Map, phf_map};

pub(crate) static ELEMENTS: [Element; 118] = [
    Element::new(1, "Hydrogen", "H"),
    Element::new(2, "Helium", "He"),
    Element::new(3, "Lithium", "Li"),
    Element::new(4, "Beryllium", "Be"),
    Element::new(5, "Boron", "B"),
    Element::new(6, "Carbon", "C"),
    Element::new(7, "Nitrogen", "N"),
    Element::new(8, "Oxygen", "O"),
    Element::new(9, "Fluorine", "F"),
    Element::new(10, "Neon", "Ne"),
    Element::new(11, "Sodium", "Na"),
    Element::new(12, "Magnesium", "Mg"),
    Element::new(13, "Aluminum", "Al"),
    Element::new(14, "Silicon", "Si"),
    Element::new(15, "Phosphorus", "P"),
    Element::new(16, "Sulfur", "S"),
    Element::new(17, "Chlorine", "Cl"),
    Element::new(18, "Argon", "Ar"),
    Element::new(19, "Potassium", "K"),
    Element::new(20, "Calcium", "Ca"),
    Element::new(21, "Scandium", "Sc"),
    Element::new(22, "Titanium", "Ti"),
    Element::new(23, "Vanadium", "V"),
    Element::new(24, "Chromium", "Cr"),
    Element::new(25, "Manganese", "Mn"),
    Element::new(26, "Iron", "Fe"),
    Element::new(27, "Cobalt", "Co"),
    Element::new(28, "Nickel", "Ni"),
    Element::new(29, "Copper", "Cu"),
    Element::new(30, "Zinc", "Zn"),
    Element::new(31, "Gallium", "Ga"),
    Element::new(32, "Germanium", "Ge"),
    Element::new(33, "Arsenic", "As"),
    Element::new(34, "Selenium", "Se"),
    Element::new(35, "Bromine", "Br"),
    Element::new(36, "Krypton", "Kr"),
    Element::new(37, "Rubidium", "Rb"),
    Element::new(38, "Strontium", "Sr"),
    Element::new(39, "Yttrium", "Y"),
    Element::new(40, "Zirconium", "Zr"),
    Element::new(41, "Niobium", "Nb"),
    Element::new(42, "Molybdenum", "Mo"),
    Element::new(43, "Technetium", "Tc"),
    Element::new(44, "Ruthenium", "Ru"),
    Element::new(45, "Rhodium", "Rh"),
    Element::new(46, "Palladium", "Pd"),
    Element::new(47, "Silver", "Ag"),
    Element::new(48, "Cadmium", "Cd"),
    Element::new(49, "Indium", "In"),
    Element::new(50, "Tin", "Sn"),
    Element::new(51, "Antimony", "Sb"),
    Element::new(52, "Tellurium", "Te"),
    Element::new(53, "Iodine", "I"),
    Element::new(54, "Xenon", "Xe"),
    Element::new(55, "Cesium", "Cs"),
    Element::new(56, "Barium", "Ba"),
    Element::new(57, "Lanthanum", "La"),
    Element::new(58, "Cerium", "Ce"),
    Element::new(59, "Praseodymium", "Pr"),
    Element::new(60, "Neodymium", "Nd"),
    Element::new(61, "Promethium", "Pm"),
    Element::new(62, "Samarium", "Sm"),
    Element::new(63, "Europium", "Eu"),
    Element::new(64, "Gadolinium", "Gd"),
    Element::new(65, "Terbium", "Tb"),
    Element::new(66, "Dysprosium", "Dy"),
    Element::new(67, "Holmium", "Ho"),
    Element::new(68, "Erbium", "Er"),
    Element::new(69, "Thulium", "Tm"),
    Element::new(70, "Ytterbium", "Yb"),
    Element::new(71, "Lutetium", "Lu"),
    Element::new(72, "Hafnium", "Hf"),
    Element::new(73, "Tantalum", "Ta"),
    Element::new(74, "Tungsten", "W"),
    Element::new(75, "Rhenium", "Re"),
    Element::new(76, "Osmium", "Os"),
    Element::new(77, "Iridium", "Ir"),
    Element::new(78, "Platinum", "Pt"),
    Element::new(79, "Gold", "Au"),
    Element::new(80, "Mercury", "Hg"),
    Element::new(81, "Thallium", "Tl"),
    Element::new(82, "Lead", "Pb"),
    Element::new(83, "Bismuth", "Bi"),
    Element::new(84, "Polonium", "Po"),
    Element::new(85, "Astatine", "At"),
    Element::new(86, "Radon", "Rn"),
    Element::new(87, "Francium", "Fr"),
    Element::new(88, "Radium", "Ra"),
    Element::new(89, "Actinium", "Ac"),
    Element::new(90, "Thorium", "Th"),
    Element::new(91, "Protactinium", "Pa"),
    Element::new(92, "Uranium", "U"),
    Element::new(93, "Neptunium", "Np"),
    Element::new(94, "Plutonium", "Pu"),
    Element::new(95, "Americium", "Am"),
    Element::new(96, "Curium", "Cm"),
    Element::new(97, "Berkelium", "Bk"),
    Element::new(98, "Californium", "Cf"),
    Element::new(99, "Einsteinium", "Es"),
    Element::new(100, "Fermium", "Fm"),
    Element::new(101, "Mendelevium", "Md"),
    Element::new(102, "Nobelium", "No"),
    Element::new(103, "Lawrencium", "Lr"),
    Element::new(104, "Rutherfordium", "Rf"),
    Element::new(105, "Dubnium", "Db"),
    Element::new(106, "Seaborgium", "Sg"),
    Element::new(107, "Bohrium", "Bh"),
    Element::new(108, "Hassium", "Hs"),
    Element::new(109, "Meitnerium", "Mt"),
    Element::new(110, "Darmstadtium", "Ds"),
    Element::new(111, "Roentgenium", "Rg"),
    Element::new(112, "Copernicium", "Cn"),
    Element::new(113, "Nihonium", "Nh"),
    Element::new(114, "Flerovium", "Fl"),
    Element::new(115, "Moscovium", "Mc"),
    Element::new(116, "Livermorium", "Lv"),
    Element::new(117, "Tennessine", "Ts"),
    Element::new(118, "Oganesson", "Og"),
];

pub(crate) static ATOMIC_NUMBERS_BY_SYMBOL: Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8, "F" => 9,
    "Ne" => 10, "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16,
    "Cl" => 17, "Ar" => 18, "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23,
    "Cr" => 24, "Mn" => 25, "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30,
    "Ga" => 31, "Ge" => 32, "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36, "Rb" => 37,
    "Sr" => 38, "Y" => 39, "Zr" => 40, "Nb" => 41, "Mo" => 42, "Tc" => 43, "Ru" => 44,
    "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48, "In" => 49, "Sn" => 50, "Sb" => 51,
    "Te" => 52, "I" => 53, "Xe" => 54, "Cs" => 55, "Ba" => 56, "La" => 57, "Ce" => 58,
    "Pr" => 59, "Nd" => 60, "Pm" => 61, "Sm" => 62, "Eu" => 63, "Gd" => 64, "Tb" => 65,
    "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71, "Hf" => 72,
    "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78, "Au" => 79,
    "Hg" => 80, "Tl" => 81, "Pb" => 82, "Bi" => 83, "Po" => 84, "At" => 85, "Rn" => 86,
    "Fr" => 87, "Ra" => 88, "Ac" => 89, "Th" => 90, "Pa" => 91, "U" => 92, "Np" => 93,
    "Pu" => 94, "Am" => 95, "Cm" => 96, "Bk" => 97, "Cf" => 98, "Es" => 99, "Fm" => 100,
    "Md" => 101, "No" => 102, "Lr" => 103, "Rf" => 104, "Db" => 105, "Sg" => 106, "Bh" => 107,
    "Hs" => 108, "Mt" => 109, "Ds" => 110, "Rg" => 111, "Cn" => 112, "Nh" => 113, "Fl" => 114,
    "Mc" => 115, "Lv" => 116, "Ts" => 117, "Og" => 118,
};
