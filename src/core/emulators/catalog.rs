//! The emulator catalog. Boot banners are stretched to each screen width at boot time.

use super::themes::{Palette, Rgb};
use super::{Emulator, ResponseStyle};

pub(super) static EMULATORS: &[Emulator] = &[
    Emulator {
        id: "vt100",
        name: "DEC VT100",
        year: 1978,
        description: "The terminal that defined terminal emulation. 80 columns of amber-free green phosphor.",
        columns: 80,
        prompt: "> ",
        uppercase: false,
        system_prompt_addition: "You are a serial terminal attached to a PDP-11 timesharing system. Write like a terse 1970s systems programmer.",
        boot_sequence: &[
            "┌──┐",
            "│ VT100 VIDEO TERMINAL",
            "│ DIGITAL EQUIPMENT CORPORATION",
            "└──┘",
            "",
            "SET-UP A: 9600 BAUD  LOCAL",
            "SELF TEST ... OK",
            "",
            "CONNECTED TO CLAUDE ON TTY02",
            "",
        ],
        palette: Palette {
            bg: Rgb(0, 0, 0),
            fg: Rgb(51, 255, 51),
            dim: Rgb(26, 140, 26),
            accent: Rgb(102, 255, 102),
        },
        response_style: ResponseStyle::Boxed {
            top: "┌─ CLAUDE ─────────────────────────────────────────────────────────────────────┐",
            bottom: "└──────────────────────────────────────────────────────────────────────────────┘",
            line_prefix: "│ ",
            before_lines: &["│ "],
            after_lines: &["│ "],
        },
    },
    Emulator {
        id: "c64",
        name: "Commodore 64",
        year: 1982,
        description: "The best-selling home computer of all time. 40 columns, light blue on blue.",
        columns: 40,
        prompt: "",
        uppercase: true,
        system_prompt_addition: "You are a Commodore 64 running BASIC V2. Keep lines short and reply in uppercase.",
        boot_sequence: &[
            "",
            "    **** COMMODORE 64 BASIC V2 **** ",
            "",
            " 64K RAM SYSTEM  38911 BASIC BYTES FREE",
            "",
            "READY.",
        ],
        palette: Palette {
            bg: Rgb(64, 50, 133),
            fg: Rgb(120, 106, 189),
            dim: Rgb(90, 80, 160),
            accent: Rgb(160, 150, 230),
        },
        response_style: ResponseStyle::Trailer {
            trailer: "READY.",
            gap_lines: 1,
            uppercase: true,
        },
    },
    Emulator {
        id: "apple2",
        name: "Apple II",
        year: 1977,
        description: "Wozniak's masterpiece. 40 columns, uppercase only, and a square bracket prompt.",
        columns: 40,
        prompt: "]",
        uppercase: true,
        system_prompt_addition: "You are an Apple II running Applesoft BASIC. The display has no lowercase letters.",
        boot_sequence: &["", "APPLE ][", "", "========", "", "]"],
        palette: Palette {
            bg: Rgb(0, 0, 0),
            fg: Rgb(65, 255, 0),
            dim: Rgb(30, 130, 0),
            accent: Rgb(140, 255, 100),
        },
        response_style: ResponseStyle::Plain { uppercase: true },
    },
    Emulator {
        id: "msdos",
        name: "MS-DOS 3.30",
        year: 1981,
        description: "The command line that ran the business world. Gray text on a black 80x25 screen.",
        columns: 80,
        prompt: "C:\\>",
        uppercase: false,
        system_prompt_addition: "You are an IBM PC compatible running MS-DOS. Speak like a helpful DOS utility.",
        boot_sequence: &[
            "Starting MS-DOS...",
            "",
            "HIMEM is testing extended memory...done.",
            "",
            "Microsoft(R) MS-DOS(R) Version 3.30",
            "(C)Copyright Microsoft Corp 1981-1987",
            "",
            "C:\\>",
        ],
        palette: Palette {
            bg: Rgb(0, 0, 0),
            fg: Rgb(192, 192, 192),
            dim: Rgb(128, 128, 128),
            accent: Rgb(255, 255, 255),
        },
        response_style: ResponseStyle::Trailer {
            trailer: "C:\\>",
            gap_lines: 1,
            uppercase: false,
        },
    },
    Emulator {
        id: "zx",
        name: "ZX Spectrum",
        year: 1982,
        description: "Sinclair's rubber-keyed wonder. 32 columns and a bright black screen.",
        columns: 32,
        prompt: "",
        uppercase: false,
        system_prompt_addition: "You are a Sinclair ZX Spectrum 48K. Keep every reply to a few very short lines.",
        boot_sequence: &["", "", "", "(C) 1982 Sinclair Research Ltd", ""],
        palette: Palette {
            bg: Rgb(0, 0, 0),
            fg: Rgb(255, 255, 255),
            dim: Rgb(170, 170, 170),
            accent: Rgb(0, 215, 215),
        },
        response_style: ResponseStyle::Trailer {
            trailer: "0 OK, 0:1",
            gap_lines: 0,
            uppercase: false,
        },
    },
    Emulator {
        id: "amiga",
        name: "Commodore Amiga",
        year: 1985,
        description: "Multitasking multimedia ahead of its time. AmigaDOS shell in a Workbench window.",
        columns: 80,
        prompt: "1> ",
        uppercase: false,
        system_prompt_addition: "You are an Amiga 500 running the AmigaDOS CLI under Workbench 1.3.",
        boot_sequence: &[
            "╔══╗",
            "║ AMIGA WORKBENCH 1.3",
            "║ Kickstart 1.3 (34.5)",
            "╚══╝",
            "",
            "Copyright (C) 1985-1988 Commodore-Amiga, Inc.",
            "All rights reserved.",
            "",
            "1>",
        ],
        palette: Palette {
            bg: Rgb(0, 85, 170),
            fg: Rgb(255, 255, 255),
            dim: Rgb(170, 200, 230),
            accent: Rgb(255, 136, 0),
        },
        response_style: ResponseStyle::Boxed {
            top: "╔═ CLAUDE.LIBRARY ═════════════════════════════════════════════════════════════╗",
            bottom: "╚══════════════════════════════════════════════════════════════════════════════╝",
            line_prefix: "║ ",
            before_lines: &[],
            after_lines: &[],
        },
    },
];
