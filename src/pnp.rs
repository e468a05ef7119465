//! Plug and Play vendor IDs as found in the EDID manufacturer field.

/// `(id, vendor name)`, sorted by id.
static PNP_IDS: &[(&str, &str)] = &[
    ("AAC", "AcerView"),
    ("ACE", "ACE CAD Enterprise Company Ltd"),
    ("ACI", "Ancor Communications Inc"),
    ("ACR", "Acer Technologies"),
    ("ACT", "Targa"),
    ("ADA", "Addi-Data GmbH"),
    ("ADI", "ADI Corporation"),
    ("AEC", "Antex Electronics Corporation"),
    ("AIC", "AG Neovo"),
    ("ALG", "Realtek Semiconductor Corp."),
    ("AMD", "Advanced Micro Devices Inc"),
    ("AMW", "AMW"),
    ("AOC", "AOC"),
    ("API", "Acer America Corp."),
    ("APP", "Apple Computer Inc"),
    ("ARS", "Arescom Inc"),
    ("AST", "AST Research"),
    ("ASU", "Asuscom Network Inc"),
    ("ATI", "Allied Telesis KK"),
    ("AUO", "AU Optronics"),
    ("AUS", "ASUSTek Computer Inc"),
    ("AVR", "AVer Information Inc."),
    ("AXI", "American Magnetics"),
    ("BMM", "BMM"),
    ("BNO", "Bang & Olufsen"),
    ("BNQ", "BenQ Corporation"),
    ("BOE", "BOE Display Technology"),
    ("BTC", "Behavior Tech Computer Corporation"),
    ("CHD", "ChangHong Electric Co.,Ltd"),
    ("CMI", "C-Media Electronics"),
    ("CMN", "Chimei Innolux Corporation"),
    ("CMO", "Chi Mei Optoelectronics corp."),
    ("COM", "Comtrol Corporation"),
    ("CPL", "Compal Electronics Inc"),
    ("CPQ", "Compaq Computer Company"),
    ("CPT", "Chunghwa Picture Tubes, Ltd."),
    ("CRX", "Cyrix Corporation"),
    ("CSO", "California Institute of Technology"),
    ("CTL", "Creative Technology Ltd"),
    ("CTX", "Creatix Polymedia GmbH"),
    ("CVT", "Cyberview Technologies"),
    ("DCL", "Dynamic Controls Ltd"),
    ("DEC", "Digital Equipment Corporation"),
    ("DEL", "Dell Inc."),
    ("DGC", "Data General Corporation"),
    ("DON", "DENON, Ltd."),
    ("DPC", "Delta Electronics Inc"),
    ("DTC", "DTC Tech Corporation"),
    ("DWE", "Daewoo Electronics Company Ltd"),
    ("DXP", "Data Expert Corporation"),
    ("ECS", "Elitegroup Computer Systems Company Ltd"),
    ("EHJ", "Epson Research"),
    ("EIZ", "Eizo Nanao Corporation"),
    ("ELO", "Elo TouchSystems Inc"),
    ("ELS", "ELSA GmbH"),
    ("ENC", "Eizo Nanao Corporation"),
    ("EPH", "Epiphan Systems Inc."),
    ("EPI", "Envision Peripherals, Inc"),
    ("EPN", "EPiCON Inc."),
    ("ESS", "ESS Technology Inc"),
    ("FCM", "Funai Electric Company Ltd"),
    ("FDC", "Future Domain"),
    ("FUS", "Fujitsu Siemens Computers GmbH"),
    ("GBT", "GIGA-BYTE Technology Co., Ltd."),
    ("GSM", "LG Electronics"),
    ("GTW", "Gateway 2000"),
    ("GWY", "Gateway 2000"),
    ("HCP", "Hitachi Computer Products Inc"),
    ("HEI", "Hyundai Electronics Industries Co., Ltd."),
    ("HIQ", "Hyundai ImageQuest"),
    ("HIT", "Hitachi Ltd"),
    ("HKC", "HKC Overseas Ltd."),
    ("HPN", "HP Inc."),
    ("HPQ", "Hewlett Packard"),
    ("HSD", "HannStar Display Corp"),
    ("HSL", "Hansol Electronics"),
    ("HTC", "Hitachi Ltd"),
    ("HWP", "Hewlett Packard"),
    ("HWV", "Huawei Technologies Co., Inc."),
    ("HYO", "HYC CO., LTD."),
    ("IBM", "IBM France"),
    ("ICL", "Fujitsu ICL"),
    ("ICO", "Intel Corp"),
    ("IFS", "InFocus Corporation"),
    ("INL", "InnoLux Display Corporation"),
    ("INT", "Interphase Corporation"),
    ("IQT", "Hyundai"),
    ("ITE", "Integrated Tech Express Inc"),
    ("IVM", "Iiyama North America"),
    ("IVO", "InfoVision Optoelectronics"),
    ("JDI", "Japan Display Inc."),
    ("KDS", "Korea Data Systems"),
    ("KFC", "KFC Computek"),
    ("KOA", "Konica corporation"),
    ("KTC", "Kingston Tech Corporation"),
    ("KYE", "KYE Systems Corporation"),
    ("LEN", "Lenovo Group Limited"),
    ("LGD", "LG Display"),
    ("LGS", "LG Semicom Company Ltd"),
    ("LKM", "ADLAS / AZALEA"),
    ("LNK", "Link Computer"),
    ("LPL", "LG Philips"),
    ("LTI", "Jongshine Tech Inc"),
    ("LTN", "Lite-On"),
    ("MAG", "MAG InnoVision"),
    ("MAT", "Panasonic"),
    ("MAX", "Belinea"),
    ("MCD", "McDATA Corporation"),
    ("MDY", "Microdyne Inc"),
    ("MEI", "Panasonic Industry Company"),
    ("MEL", "Mitsubishi Electric Corporation"),
    ("MIR", "Miro Computer Products AG"),
    ("MIT", "MCM Industrial Technology GmbH"),
    ("MOT", "Motorola UDS"),
    ("MSC", "Mouse Systems Corporation"),
    ("MSH", "Microsoft"),
    ("MSI", "Micro-Star International Co., Ltd."),
    ("MTC", "Mars-Tech Corporation"),
    ("NAN", "Nanao"),
    ("NCP", "Najing CEC Panda FPD Technology CO. ltd"),
    ("NEC", "NEC Corporation"),
    ("NEX", "Nexgen Mediatech Inc."),
    ("NOK", "Nokia Display Products"),
    ("NSC", "National Semiconductor Corporation"),
    ("NVD", "Nvidia"),
    ("OKI", "OKI Electric Industrial Company Ltd"),
    ("OLC", "Olicom A/S"),
    ("ONK", "ONKYO Corporation"),
    ("OQI", "Optiquest"),
    ("OTM", "Optoma Corporation"),
    ("PBN", "Packard Bell"),
    ("PCK", "Daewoo"),
    ("PDC", "Polaroid"),
    ("PEI", "PEI Electronics Inc"),
    ("PGS", "Princeton Graphic Systems"),
    ("PHL", "Philips Consumer Electronics Company"),
    ("PIO", "Pioneer Electronic Corporation"),
    ("PLX", "Parallax Graphics"),
    ("PNR", "Planar Systems, Inc."),
    ("PRT", "Princeton"),
    ("QDS", "Quanta Display Inc."),
    ("QTM", "Quantum"),
    ("REL", "Relisys"),
    ("RHT", "Red Hat, Inc."),
    ("RII", "Racal Interlan Inc"),
    ("RTK", "Realtek Semiconductor Corp."),
    ("SAM", "Samsung Electric Company"),
    ("SAN", "Sanyo Electric Co.,Ltd."),
    ("SBI", "Smarttech"),
    ("SCM", "SCM Microsystems Inc"),
    ("SDC", "Samsung Display Corp."),
    ("SEC", "Seiko Epson Corporation"),
    ("SEG", "Sega Enterprises Ltd"),
    ("SGI", "Silicon Graphics"),
    ("SGT", "Stargate Technology"),
    ("SHP", "Sharp Corporation"),
    ("SII", "Silicon Image, Inc."),
    ("SIS", "Silicon Integrated Systems Corporation"),
    ("SMC", "Samtron"),
    ("SMI", "Smile"),
    ("SMK", "SMK CORPORATION"),
    ("SNI", "Siemens Nixdorf"),
    ("SNS", "Cirtech (UK) Ltd"),
    ("SNY", "Sony"),
    ("SPT", "Sceptre Tech Inc."),
    ("SRC", "Shamrock Technology"),
    ("STN", "Samtron"),
    ("STP", "Sceptre Tech Inc."),
    ("SUN", "Sun Electronics Corporation"),
    ("SVD", "SVD Computer"),
    ("SYN", "Synaptics Inc"),
    ("TAT", "Tatung Company of America Inc"),
    ("TCL", "Technical Concepts Ltd"),
    ("TOS", "Toshiba Corporation"),
    ("TRL", "Royal Information"),
    ("TSB", "Toshiba America Info Systems Inc"),
    ("TSI", "TeleVideo Systems"),
    ("TTI", "Trenton Terminals Inc"),
    ("TXN", "Texas Instruments"),
    ("UMC", "United Microelectr Corporation"),
    ("UNM", "Unisys Corporation"),
    ("USR", "U.S. Robotics Inc"),
    ("VES", "Vestel Elektronik Sanayi ve Ticaret A. S."),
    ("VIZ", "VIZIO, Inc"),
    ("VLV", "Valve Corporation"),
    ("VSC", "ViewSonic Corporation"),
    ("WAC", "Wacom Tech"),
    ("WDE", "Westinghouse Digital Electronics"),
    ("WTC", "Wen Technology"),
    ("WYS", "Wyse Technology"),
    ("XER", "Xerox Corporation"),
    ("XLX", "Xilinx, Inc."),
    ("XMI", "Xiaomi Communications Co., Ltd."),
    ("YMH", "Yamaha Corporation"),
    ("ZCM", "Zenith Data Systems"),
    ("ZDS", "Zenith Data Systems"),
];

/// Vendor name registered for a three-letter PNP ID.
pub fn vendor_name(id: &str) -> Option<&'static str> {
    PNP_IDS
        .binary_search_by(|&(known, _)| known.cmp(id))
        .ok()
        .map(|index| PNP_IDS[index].1)
}
